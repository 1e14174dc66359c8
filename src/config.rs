use std::path::PathBuf;
use std::time::Duration;

use crate::models::room::{CatalogError, RoomCatalog};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const CURRENCY_SYMBOL: &str = "₹";
const CONFIRMATION_DELAY_MS: u64 = 2000;
const SUBMISSION_RETENTION_MS: u64 = 10 * 60 * 1000;
const BOOKING_FORM_PATH: &str = "/luxury_booking_form.html";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every rendered amount
    pub currency_symbol: String,
    /// Simulated processing time between submit and confirmation
    pub confirmation_delay: Duration,
    /// How long a confirmed or cancelled submission stays queryable
    pub submission_retention: Duration,
    /// Optional JSON catalog replacing the standard room line-up
    pub room_catalog_path: Option<PathBuf>,
    pub booking_form_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            confirmation_delay: Duration::from_millis(CONFIRMATION_DELAY_MS),
            submission_retention: Duration::from_millis(SUBMISSION_RETENTION_MS),
            room_catalog_path: None,
            booking_form_path: BOOKING_FORM_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            currency_symbol: std::env::var("CURRENCY_SYMBOL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.currency_symbol),
            confirmation_delay: std::env::var("CONFIRMATION_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.confirmation_delay),
            submission_retention: std::env::var("SUBMISSION_RETENTION_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.submission_retention),
            room_catalog_path: std::env::var("ROOM_CATALOG_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            booking_form_path: std::env::var("BOOKING_FORM_PATH")
                .unwrap_or(defaults.booking_form_path),
        }
    }

    /// Load the room catalog named by the configuration, or the standard one
    pub fn load_catalog(&self) -> Result<RoomCatalog, CatalogError> {
        match &self.room_catalog_path {
            Some(path) => {
                log::info!("Loading room catalog from {}", path.display());
                RoomCatalog::from_json_file(path)
            }
            None => Ok(RoomCatalog::standard()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "HOST",
        "PORT",
        "CURRENCY_SYMBOL",
        "CONFIRMATION_DELAY_MS",
        "SUBMISSION_RETENTION_MS",
        "ROOM_CATALOG_PATH",
        "BOOKING_FORM_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = AppConfig::from_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.confirmation_delay, Duration::from_millis(2000));
        assert_eq!(config.submission_retention, Duration::from_secs(600));
        assert!(config.room_catalog_path.is_none());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "9090");
        std::env::set_var("CURRENCY_SYMBOL", "Rs. ");
        std::env::set_var("CONFIRMATION_DELAY_MS", "50");
        std::env::set_var("SUBMISSION_RETENTION_MS", "1000");

        let config = AppConfig::from_env();
        clear_env();

        assert_eq!(config.port, 9090);
        assert_eq!(config.currency_symbol, "Rs. ");
        assert_eq!(config.confirmation_delay, Duration::from_millis(50));
        assert_eq!(config.submission_retention, Duration::from_secs(1));
    }

    #[test]
    #[serial]
    fn test_unparsable_numbers_fall_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("CONFIRMATION_DELAY_MS", "-5");

        let config = AppConfig::from_env();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.confirmation_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_unreadable_catalog_path_is_catalog_error() {
        let config = AppConfig {
            room_catalog_path: Some(std::env::temp_dir().join("missing-rooms-catalog.json")),
            ..AppConfig::default()
        };

        assert!(matches!(config.load_catalog(), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_standard_catalog_without_path() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert!(catalog.contains("garden"));
    }
}
