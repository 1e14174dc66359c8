use actix_web::{web, HttpResponse, Responder};

use crate::models::site::SiteAction;
use crate::routes::ErrorResponse;
use crate::services::site_content_service::{SiteContentService, OFFER_BENEFITS};
use crate::state::AppState;

pub async fn offer_benefits() -> impl Responder {
    HttpResponse::Ok().json(OFFER_BENEFITS)
}

pub async fn dining() -> impl Responder {
    HttpResponse::Ok().json(SiteContentService::dining())
}

pub async fn run_action(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match SiteAction::from_slug(&slug) {
        Some(action) => HttpResponse::Ok().json(SiteContentService::notification_for(
            action,
            &state.config.booking_form_path,
        )),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "unknown_action",
            format!("Unknown action '{}'", slug),
        )),
    }
}
