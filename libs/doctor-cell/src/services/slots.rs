use chrono::NaiveTime;

use crate::models::TimeSlotOption;
use crate::time::{format_hour_minute, format_hour_minute_second};

const FIRST_HOUR: u32 = 5;
const END_HOUR: u32 = 23; // exclusive
const STEP_MINUTES: usize = 30;

/// Bookable times of day, 05:00 through 22:30 in 30 minute steps.
pub fn generate_time_slot_times() -> Vec<NaiveTime> {
    (FIRST_HOUR..END_HOUR)
        .flat_map(|hour| {
            (0..60u32)
                .step_by(STEP_MINUTES)
                .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
        })
        .collect()
}

/// Same universe as [`generate_time_slot_times`], formatted `HH:MM:SS`.
pub fn generate_time_slots() -> Vec<String> {
    generate_time_slot_times()
        .into_iter()
        .map(format_hour_minute_second)
        .collect()
}

pub fn time_slot_options() -> Vec<TimeSlotOption> {
    generate_time_slot_times()
        .into_iter()
        .map(|time| TimeSlotOption {
            value: format_hour_minute_second(time),
            label: format_hour_minute(time),
        })
        .collect()
}
