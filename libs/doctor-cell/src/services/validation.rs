use chrono::NaiveTime;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use shared_models::validation::{FieldError, ValidationCode};

use crate::i18n::{Locale, Message};
use crate::models::{UpsertDoctorRequest, ValidatedDoctor};
use crate::time::parse_time_of_day;

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_SPECIALTY: &str = "specialty";
pub const FIELD_PRICE: &str = "appointmentPriceInCents";
pub const FIELD_FROM_WEEK_DAY: &str = "availableFromWeekDay";
pub const FIELD_TO_WEEK_DAY: &str = "availableToWeekDay";
pub const FIELD_FROM_TIME: &str = "availableFromTime";
pub const FIELD_TO_TIME: &str = "availableToTime";

const HYPHENATED_UUID_LEN: usize = 36;

/// Checks a doctor form submission.
///
/// Every field rule runs and all failures are reported together. The
/// start-before-end rule runs only once the fields themselves are valid, and
/// reports on `availableToTime`. Nothing is partially accepted.
pub fn validate_upsert(
    request: &UpsertDoctorRequest,
    locale: Locale,
) -> Result<ValidatedDoctor, Vec<FieldError>> {
    let id = doctor_id(request.id.as_deref(), locale);
    let name = required_text(&request.name, FIELD_NAME, locale, Message::NameRequired);
    let specialty = required_text(&request.specialty, FIELD_SPECIALTY, locale, Message::SpecialtyRequired);
    let price = price_in_cents(request.appointment_price_in_cents.as_ref(), locale);
    let from_day = week_day(request.available_from_week_day.as_ref(), FIELD_FROM_WEEK_DAY, locale);
    let to_day = week_day(request.available_to_week_day.as_ref(), FIELD_TO_WEEK_DAY, locale);
    let from_time = time_of_day(&request.available_from_time, FIELD_FROM_TIME, locale, Message::FromTimeRequired);
    let to_time = time_of_day(&request.available_to_time, FIELD_TO_TIME, locale, Message::ToTimeRequired);

    match (id, name, specialty, price, from_day, to_day, from_time, to_time) {
        (
            Ok(id),
            Ok(name),
            Ok(specialty),
            Ok(price),
            Ok(from_day),
            Ok(to_day),
            Ok((from_raw, from_parsed)),
            Ok((to_raw, to_parsed)),
        ) => {
            if from_parsed >= to_parsed {
                debug!("Doctor form rejected: {} is not before {}", from_raw, to_raw);
                return Err(vec![error(
                    FIELD_TO_TIME,
                    ValidationCode::CrossField,
                    locale,
                    Message::StartBeforeEnd,
                )]);
            }

            Ok(ValidatedDoctor {
                id,
                name,
                specialty,
                appointment_price_in_cents: price,
                available_from_week_day: from_day,
                available_to_week_day: to_day,
                available_from_time: from_raw,
                available_to_time: to_raw,
            })
        }
        // At least one field failed, so the list below is never empty.
        (id, name, specialty, price, from_day, to_day, from_time, to_time) => {
            let errors: Vec<FieldError> = [
                id.err(),
                name.err(),
                specialty.err(),
                price.err(),
                from_day.err(),
                to_day.err(),
                from_time.err(),
                to_time.err(),
            ]
            .into_iter()
            .flatten()
            .collect();

            debug!("Doctor form rejected with {} field error(s)", errors.len());
            Err(errors)
        }
    }
}

fn error(field: &str, code: ValidationCode, locale: Locale, message: Message) -> FieldError {
    FieldError::new(field, code, locale.message(message))
}

/// Absent means "create". Only the canonical 36-character hyphenated form is accepted.
fn doctor_id(value: Option<&str>, locale: Locale) -> Result<Option<Uuid>, FieldError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let raw = raw.trim();
    match Uuid::try_parse(raw) {
        Ok(id) if raw.len() == HYPHENATED_UUID_LEN => Ok(Some(id)),
        _ => Err(error(FIELD_ID, ValidationCode::Format, locale, Message::InvalidId)),
    }
}

fn required_text(value: &str, field: &str, locale: Locale, message: Message) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error(field, ValidationCode::Required, locale, message));
    }
    Ok(trimmed.to_string())
}

/// Whole cents, at least one. Floats, strings and negatives count as missing.
fn price_in_cents(value: Option<&Value>, locale: Locale) -> Result<i32, FieldError> {
    match value.and_then(Value::as_u64) {
        Some(cents) if cents >= 1 => i32::try_from(cents)
            .map_err(|_| error(FIELD_PRICE, ValidationCode::Range, locale, Message::PriceTooLarge)),
        _ => Err(error(FIELD_PRICE, ValidationCode::Required, locale, Message::PriceRequired)),
    }
}

fn week_day(value: Option<&Value>, field: &str, locale: Locale) -> Result<u8, FieldError> {
    match value.and_then(Value::as_u64) {
        Some(day @ 0..=6) => Ok(day as u8),
        _ => Err(error(field, ValidationCode::Range, locale, Message::WeekDayRange)),
    }
}

fn time_of_day(
    value: &str,
    field: &str,
    locale: Locale,
    required: Message,
) -> Result<(String, NaiveTime), FieldError> {
    let raw = required_text(value, field, locale, required)?;

    match parse_time_of_day(&raw) {
        Some(parsed) => Ok((raw, parsed)),
        None => Err(error(field, ValidationCode::Format, locale, Message::InvalidTime)),
    }
}
