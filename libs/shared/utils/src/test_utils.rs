use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub clinic_utc_offset_minutes: i32,
    pub default_locale: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            clinic_utc_offset_minutes: 0,
            default_locale: "en".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the record store at a mock server.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            clinic_utc_offset_minutes: self.clinic_utc_offset_minutes,
            default_locale: self.default_locale.clone(),
            port: 3000,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    /// A `doctors` row as PostgREST returns it (Monday to Friday, 08:00 to 18:00).
    pub fn doctor_row(doctor_id: &Uuid, clinic_id: &Uuid, name: &str) -> serde_json::Value {
        json!({
            "id": doctor_id,
            "clinic_id": clinic_id,
            "name": name,
            "specialty": "Cardiologia",
            "avatar_image_url": null,
            "available_from_week_day": 1,
            "available_to_week_day": 5,
            "available_from_time": "08:00:00",
            "available_to_time": "18:00:00",
            "appointment_price_in_cents": 15000,
            // `timestamp` columns come back without an offset.
            "created_at": Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            "updated_at": null
        })
    }

    /// A complete, valid doctor form submission.
    pub fn doctor_form() -> serde_json::Value {
        json!({
            "name": "Dr. Ana",
            "specialty": "Cardio",
            "appointmentPriceInCents": 5000,
            "availableFromWeekDay": 1,
            "availableToWeekDay": 5,
            "availableFromTime": "08:00",
            "availableToTime": "18:00"
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "message": message,
            "code": code
        })
    }
}
