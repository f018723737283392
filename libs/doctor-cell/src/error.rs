use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::validation::{summarize, FieldError};

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error("Doctor not found: {0}")]
    NotFound(Uuid),

    #[error("Stored availability is malformed: {0}")]
    InvalidAvailability(String),

    #[error("Record store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("Unexpected record shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::Validation(errors) => AppError::Validation(errors),
            DoctorError::NotFound(id) => AppError::NotFound(format!("Doctor {} not found", id)),
            DoctorError::InvalidAvailability(msg) => AppError::Internal(msg),
            DoctorError::Store(e) => AppError::Database(e.to_string()),
            DoctorError::Decode(e) => AppError::Internal(e.to_string()),
        }
    }
}
