#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};
use std::time::Duration;

use hotel_booking_desk::config::AppConfig;
use hotel_booking_desk::models::room::RoomCatalog;
use hotel_booking_desk::routes;
use hotel_booking_desk::state::AppState;

pub const TEST_DELAY: Duration = Duration::from_millis(50);

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig {
            confirmation_delay: TEST_DELAY,
            booking_form_path: "/luxury_booking_form.html".to_string(),
            ..AppConfig::default()
        };

        Self {
            state: web::Data::new(AppState::new(config, RoomCatalog::standard())),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    }
}

pub fn valid_draft() -> Value {
    json!({
        "checkIn": "2025-01-15",
        "checkOut": "2025-01-18",
        "roomCode": "deluxe",
        "firstName": "Asha",
        "lastName": "Rao",
        "email": "asha.rao@example.com",
        "phone": "+91 98450 12345",
        "adults": 2,
        "children": 0,
        "specialRequests": "Airport pickup"
    })
}
