pub mod confirmation_service;
pub mod site_content_service;
pub mod summary_service;
pub mod validation_service;
