use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use hotel_booking_desk::config::AppConfig;
use hotel_booking_desk::routes;
use hotel_booking_desk::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("{}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, err));
        }
    };
    log::info!("Room catalog loaded with {} rooms", catalog.entries().len());

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState::new(config, catalog));

    log::info!("Starting HTTP server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((host, port))?
    .run()
    .await
}
