use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

pub mod booking;
pub mod health;
pub mod rooms;
pub mod site;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body: {}", err);
    let body = ErrorResponse::new("invalid_json", err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new("invalid_query", err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/rooms")
                        .route("", web::get().to(rooms::get_rooms))
                        .route("/rates", web::get().to(rooms::get_rates))
                        .route("/{code}/inquiry", web::get().to(rooms::get_inquiry)),
                )
                .service(
                    web::scope("/booking")
                        .route("/summary", web::post().to(booking::summarize))
                        .route("/validate", web::post().to(booking::validate))
                        .route("/date-bounds", web::get().to(booking::date_bounds))
                        .route("/submissions", web::post().to(booking::submit))
                        .route("/submissions/{id}", web::get().to(booking::get_submission))
                        .route(
                            "/submissions/{id}",
                            web::delete().to(booking::cancel_submission),
                        ),
                )
                .service(
                    web::scope("/site")
                        .route("/offers/benefits", web::get().to(site::offer_benefits))
                        .route("/dining", web::get().to(site::dining))
                        .route("/actions/{action}", web::post().to(site::run_action)),
                ),
        );
}
