use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::{extract::WithRejection, TypedHeader};
use headers::{Authorization, authorization::Bearer};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::i18n::Locale;
use crate::models::{AvailabilityResponse, DoctorCard, UpsertDoctorRequest};
use crate::services::{doctor::DoctorService, slots::time_slot_options, validation::validate_upsert};

type BearerHeader = Option<TypedHeader<Authorization<Bearer>>>;

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClinicDoctorsQuery {
    pub clinic_id: Uuid,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDoctorBody {
    pub clinic_id: Uuid,
    #[serde(flatten)]
    pub doctor: UpsertDoctorRequest,
}

/// Requested locale, else the configured default, else pt-BR.
fn resolve_locale(requested: Option<&str>, config: &AppConfig) -> Locale {
    requested
        .and_then(Locale::from_tag)
        .or_else(|| Locale::from_tag(&config.default_locale))
        .unwrap_or_default()
}

fn bearer_token(auth: &BearerHeader) -> Option<&str> {
    auth.as_ref().map(|TypedHeader(authorization)| authorization.token())
}

#[axum::debug_handler]
pub async fn get_time_slots() -> Json<Value> {
    let slots = time_slot_options();

    Json(json!({
        "time_slots": slots,
        "total": slots.len()
    }))
}

#[axum::debug_handler]
pub async fn validate_doctor(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<LocaleQuery>,
    WithRejection(Json(request), _): WithRejection<Json<UpsertDoctorRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    let locale = resolve_locale(query.locale.as_deref(), &state);

    let doctor = validate_upsert(&request, locale).map_err(AppError::Validation)?;

    Ok(Json(json!({
        "valid": true,
        "doctor": doctor
    })))
}

#[axum::debug_handler]
pub async fn upsert_doctor(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<LocaleQuery>,
    auth: BearerHeader,
    WithRejection(Json(body), _): WithRejection<Json<UpsertDoctorBody>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let locale = resolve_locale(query.locale.as_deref(), &state);
    let doctor_service = DoctorService::new(&state);

    let status = if body.doctor.id.is_some() { StatusCode::OK } else { StatusCode::CREATED };

    let doctor = doctor_service
        .upsert_doctor(body.clinic_id, &body.doctor, locale, bearer_token(&auth))
        .await?;

    Ok((status, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn list_clinic_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<ClinicDoctorsQuery>,
    auth: BearerHeader,
) -> Result<Json<Value>, AppError> {
    let locale = resolve_locale(query.locale.as_deref(), &state);
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service
        .list_clinic_doctors(query.clinic_id, bearer_token(&auth))
        .await?;

    let cards = doctors
        .iter()
        .map(|doctor| doctor_service.doctor_card(doctor, locale))
        .collect::<Result<Vec<DoctorCard>, _>>()?;

    Ok(Json(json!({
        "doctors": cards,
        "total": cards.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    auth: BearerHeader,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctor = doctor_service.get_doctor(doctor_id, bearer_token(&auth)).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor_availability(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<LocaleQuery>,
    auth: BearerHeader,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let locale = resolve_locale(query.locale.as_deref(), &state);
    let doctor_service = DoctorService::new(&state);

    let doctor = doctor_service.get_doctor(doctor_id, bearer_token(&auth)).await?;
    let availability = doctor_service.doctor_availability(&doctor)?;

    Ok(Json(AvailabilityResponse::new(doctor.id, &availability, locale)))
}
