pub mod booking;
pub mod room;
pub mod site;
pub mod summary;
pub mod validation;
