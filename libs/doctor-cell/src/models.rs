use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Datelike, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::i18n::Locale;
use crate::time::{format_hour_minute, format_hour_minute_second};

/// Row of the `doctors` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub avatar_image_url: Option<String>,
    pub available_from_week_day: i32, // 0 = Sunday, 1 = Monday, etc.
    pub available_to_week_day: i32,
    pub available_from_time: String,
    pub available_to_time: String,
    pub appointment_price_in_cents: i32,
    #[serde(deserialize_with = "store_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "optional_store_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Reads a `timestamp` column. Values without an offset are taken as UTC; values
/// carrying one (a `timestamptz` column or an RFC 3339 literal) are normalised to UTC.
pub fn parse_store_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
}

fn store_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_store_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp {:?}", raw)))
}

fn optional_store_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_store_timestamp(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp {:?}", raw)))
        })
        .transpose()
}

impl Doctor {
    /// First character of every space-separated part of the name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Candidate record as submitted by the doctor form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertDoctorRequest {
    pub id: Option<String>,
    pub name: String,
    pub specialty: String,
    // Numeric fields stay raw so a float or a string becomes a field error
    // instead of a body rejection.
    pub appointment_price_in_cents: Option<Value>,
    pub available_from_week_day: Option<Value>,
    pub available_to_week_day: Option<Value>,
    pub available_from_time: String,
    pub available_to_time: String,
}

/// Accepted output of the upsert validator. Only this type is ever written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedDoctor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub specialty: String,
    pub appointment_price_in_cents: i32,
    pub available_from_week_day: u8,
    pub available_to_week_day: u8,
    pub available_from_time: String,
    pub available_to_time: String,
}

impl ValidatedDoctor {
    pub fn to_row(&self, clinic_id: Uuid) -> Value {
        json!({
            "clinic_id": clinic_id,
            "name": self.name,
            "specialty": self.specialty,
            "appointment_price_in_cents": self.appointment_price_in_cents,
            "available_from_week_day": self.available_from_week_day,
            "available_to_week_day": self.available_to_week_day,
            "available_from_time": self.available_from_time,
            "available_to_time": self.available_to_time,
        })
    }
}

/// Weekday range plus time-of-day range a doctor accepts appointments in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub from_week_day: Weekday,
    pub to_week_day: Weekday,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInstant(pub NaiveDateTime);

impl ResolvedInstant {
    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn weekday_name(&self, locale: Locale) -> &'static str {
        locale.weekday_name(self.weekday())
    }

    pub fn hour_minute(&self) -> String {
        format_hour_minute(self.0.time())
    }

    pub fn hour_minute_second(&self) -> String {
        format_hour_minute_second(self.0.time())
    }
}

/// Next occurrence of a doctor's availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAvailability {
    pub from: ResolvedInstant,
    pub to: ResolvedInstant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedInstantView {
    pub date: NaiveDate,
    pub weekday: String,
    pub hour_minute: String,
    pub hour_minute_second: String,
}

impl ResolvedInstantView {
    pub fn new(instant: &ResolvedInstant, locale: Locale) -> Self {
        Self {
            date: instant.date(),
            weekday: instant.weekday_name(locale).to_string(),
            hour_minute: instant.hour_minute(),
            hour_minute_second: instant.hour_minute_second(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub doctor_id: Uuid,
    pub from: ResolvedInstantView,
    pub to: ResolvedInstantView,
}

impl AvailabilityResponse {
    pub fn new(doctor_id: Uuid, availability: &ResolvedAvailability, locale: Locale) -> Self {
        Self {
            doctor_id,
            from: ResolvedInstantView::new(&availability.from, locale),
            to: ResolvedInstantView::new(&availability.to, locale),
        }
    }
}

/// Display summary of a doctor, as shown on the clinic's doctor list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCard {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub initials: String,
    pub avatar_image_url: Option<String>,
    pub availability_label: String,
    pub time_range_label: String,
    pub price_label: String,
    pub appointment_price_in_cents: i32,
}

impl DoctorCard {
    pub fn new(doctor: &Doctor, availability: &ResolvedAvailability, locale: Locale) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            initials: doctor.initials(),
            avatar_image_url: doctor.avatar_image_url.clone(),
            availability_label: locale.weekday_range(
                availability.from.weekday(),
                availability.to.weekday(),
            ),
            time_range_label: format!(
                "{} - {}",
                availability.from.hour_minute(),
                availability.to.hour_minute()
            ),
            price_label: locale.format_price(doctor.appointment_price_in_cents),
            appointment_price_in_cents: doctor.appointment_price_in_cents,
        }
    }
}
