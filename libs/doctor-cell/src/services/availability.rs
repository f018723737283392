use chrono::{Datelike, Duration, FixedOffset, NaiveDateTime, NaiveTime, Offset, Utc, Weekday};
use tracing::debug;

use shared_config::AppConfig;

use crate::error::DoctorError;
use crate::models::{AvailabilityWindow, Doctor, ResolvedAvailability, ResolvedInstant};
use crate::time::{parse_time_of_day, weekday_from_index};

/// Wall clock of the clinic, a fixed offset from UTC.
#[derive(Debug, Clone, Copy)]
pub struct ClinicClock {
    offset: FixedOffset,
}

impl ClinicClock {
    pub fn new(offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix());
        Self { offset }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.clinic_utc_offset_minutes)
    }

    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

impl AvailabilityWindow {
    /// Reads the window out of a stored doctor row.
    pub fn from_doctor(doctor: &Doctor) -> Result<Self, DoctorError> {
        Ok(Self {
            from_week_day: stored_weekday(doctor.available_from_week_day)?,
            to_week_day: stored_weekday(doctor.available_to_week_day)?,
            from_time: stored_time(&doctor.available_from_time)?,
            to_time: stored_time(&doctor.available_to_time)?,
        })
    }
}

fn stored_weekday(index: i32) -> Result<Weekday, DoctorError> {
    weekday_from_index(i64::from(index))
        .ok_or_else(|| DoctorError::InvalidAvailability(format!("weekday index {} outside 0..=6", index)))
}

fn stored_time(value: &str) -> Result<NaiveTime, DoctorError> {
    parse_time_of_day(value.trim())
        .ok_or_else(|| DoctorError::InvalidAvailability(format!("time of day {:?} is malformed", value)))
}

/// First instant on `weekday` at `time` that is not before `now`.
///
/// Today counts while its instant is still ahead (or exactly now); once it has
/// passed, the same weekday next week is returned.
pub fn next_occurrence(weekday: Weekday, time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date();
    let days_ahead = (weekday.num_days_from_sunday() + 7 - today.weekday().num_days_from_sunday()) % 7;
    let candidate = (today + Duration::days(i64::from(days_ahead))).and_time(time);

    if candidate >= now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Resolves both ends of the window independently against `now`.
pub fn resolve_availability(window: &AvailabilityWindow, now: NaiveDateTime) -> ResolvedAvailability {
    let from = next_occurrence(window.from_week_day, window.from_time, now);
    let to = next_occurrence(window.to_week_day, window.to_time, now);

    debug!("Resolved availability window {} .. {} (now {})", from, to, now);

    ResolvedAvailability {
        from: ResolvedInstant(from),
        to: ResolvedInstant(to),
    }
}

pub fn resolve_doctor_availability(
    doctor: &Doctor,
    now: NaiveDateTime,
) -> Result<ResolvedAvailability, DoctorError> {
    let window = AvailabilityWindow::from_doctor(doctor)?;
    Ok(resolve_availability(&window, now))
}
