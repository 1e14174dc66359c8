use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::room::RoomCatalog;
use crate::services::confirmation_service::ConfirmationScheduler;
use crate::services::summary_service::SummaryCalculator;
use crate::services::validation_service::FormValidator;

/// Everything the handlers share, built once at startup.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<RoomCatalog>,
    pub calculator: SummaryCalculator,
    pub validator: FormValidator,
    pub confirmations: ConfirmationScheduler,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: RoomCatalog) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            calculator: SummaryCalculator::new(Arc::clone(&catalog), &config.currency_symbol),
            validator: FormValidator::new(Arc::clone(&catalog)),
            confirmations: ConfirmationScheduler::new(
                config.confirmation_delay,
                config.submission_retention,
            ),
            catalog,
            config,
        }
    }
}
