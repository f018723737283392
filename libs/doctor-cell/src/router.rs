use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_clinic_doctors).post(handlers::upsert_doctor))
        .route("/time-slots", get(handlers::get_time_slots))
        .route("/validate", post(handlers::validate_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/availability", get(handlers::get_doctor_availability))
        .with_state(state)
}
