use chrono::Utc;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::error::DoctorError;
use crate::i18n::Locale;
use crate::models::{Doctor, DoctorCard, ResolvedAvailability, UpsertDoctorRequest, ValidatedDoctor};
use crate::services::availability::{resolve_doctor_availability, ClinicClock};
use crate::services::validation::validate_upsert;

pub struct DoctorService {
    supabase: SupabaseClient,
    clock: ClinicClock,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            clock: ClinicClock::from_config(config),
        }
    }

    /// Validate a form submission and write it. Inserts when the request has no
    /// `id`, otherwise updates the doctor with that id inside `clinic_id`.
    pub async fn upsert_doctor(
        &self,
        clinic_id: Uuid,
        request: &UpsertDoctorRequest,
        locale: Locale,
        auth_token: Option<&str>,
    ) -> Result<Doctor, DoctorError> {
        let validated = validate_upsert(request, locale).map_err(|errors| {
            warn!("Rejected doctor upsert for clinic {}: {} error(s)", clinic_id, errors.len());
            DoctorError::Validation(errors)
        })?;

        match validated.id {
            None => self.insert_doctor(clinic_id, &validated, auth_token).await,
            Some(doctor_id) => self.update_doctor(clinic_id, doctor_id, &validated, auth_token).await,
        }
    }

    async fn insert_doctor(
        &self,
        clinic_id: Uuid,
        doctor: &ValidatedDoctor,
        auth_token: Option<&str>,
    ) -> Result<Doctor, DoctorError> {
        debug!("Creating doctor {} in clinic {}", doctor.name, clinic_id);

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/doctors",
            auth_token,
            Some(doctor.to_row(clinic_id)),
            Some(SupabaseClient::return_representation()),
        ).await?;

        let row = result
            .into_iter()
            .next()
            .ok_or_else(|| DoctorError::Store(anyhow::anyhow!("Failed to create doctor")))?;

        let created: Doctor = serde_json::from_value(row)?;
        debug!("Doctor created with ID: {}", created.id);

        Ok(created)
    }

    async fn update_doctor(
        &self,
        clinic_id: Uuid,
        doctor_id: Uuid,
        doctor: &ValidatedDoctor,
        auth_token: Option<&str>,
    ) -> Result<Doctor, DoctorError> {
        debug!("Updating doctor {} in clinic {}", doctor_id, clinic_id);

        let mut update_data = doctor.to_row(clinic_id);
        if let Value::Object(ref mut fields) = update_data {
            fields.insert("updated_at".to_string(), json!(Utc::now().naive_utc()));
        }

        let path = format!("/rest/v1/doctors?id=eq.{}&clinic_id=eq.{}", doctor_id, clinic_id);
        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::PATCH,
            &path,
            auth_token,
            Some(update_data),
            Some(SupabaseClient::return_representation()),
        ).await?;

        // PostgREST answers an update that matched nothing with an empty list.
        let row = result.into_iter().next().ok_or(DoctorError::NotFound(doctor_id))?;

        Ok(serde_json::from_value(row)?)
    }

    pub async fn get_doctor(
        &self,
        doctor_id: Uuid,
        auth_token: Option<&str>,
    ) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);

        let path = format!("/rest/v1/doctors?id=eq.{}", doctor_id);
        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            auth_token,
            None,
        ).await?;

        let row = result.into_iter().next().ok_or(DoctorError::NotFound(doctor_id))?;

        Ok(serde_json::from_value(row)?)
    }

    pub async fn list_clinic_doctors(
        &self,
        clinic_id: Uuid,
        auth_token: Option<&str>,
    ) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing doctors for clinic: {}", clinic_id);

        let path = format!("/rest/v1/doctors?clinic_id=eq.{}&order=name.asc", clinic_id);
        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            auth_token,
            None,
        ).await?;

        let doctors = result.into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Doctor>, _>>()?;

        Ok(doctors)
    }

    /// Next availability window of `doctor` on the clinic clock.
    pub fn doctor_availability(&self, doctor: &Doctor) -> Result<ResolvedAvailability, DoctorError> {
        resolve_doctor_availability(doctor, self.clock.now())
    }

    pub fn doctor_card(&self, doctor: &Doctor, locale: Locale) -> Result<DoctorCard, DoctorError> {
        let availability = self.doctor_availability(doctor)?;
        Ok(DoctorCard::new(doctor, &availability, locale))
    }
}
