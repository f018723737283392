pub mod error;
pub mod handlers;
pub mod i18n;
pub mod router;
pub mod models;
pub mod services;
pub mod time;

// Re-export all models and services for external use
pub use error::DoctorError;
pub use i18n::Locale;
pub use models::*;
pub use services::*;
