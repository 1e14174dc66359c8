use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: String,
    rooms: usize,
    confirmation_delay_ms: u128,
    environment: String,
    version: String,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        rooms: state.catalog.entries().len(),
        confirmation_delay_ms: state.config.confirmation_delay.as_millis(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
