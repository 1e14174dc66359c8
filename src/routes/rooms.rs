use actix_web::{web, HttpResponse, Responder};

use crate::routes::ErrorResponse;
use crate::services::site_content_service::SiteContentService;
use crate::state::AppState;

pub async fn get_rooms(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.entries())
}

pub async fn get_rates(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(SiteContentService::rate_card(
        &state.catalog,
        &state.config.currency_symbol,
    ))
}

pub async fn get_inquiry(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();

    match SiteContentService::room_inquiry(
        &state.catalog,
        &code,
        &state.config.currency_symbol,
        &state.config.booking_form_path,
    ) {
        Some(inquiry) => HttpResponse::Ok().json(inquiry),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "room_not_found",
            format!("No room with code '{}'", code),
        )),
    }
}
