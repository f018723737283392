pub mod doctor;
pub mod availability;
pub mod slots;
pub mod validation;

pub use doctor::DoctorService;
pub use availability::{next_occurrence, resolve_availability, resolve_doctor_availability, ClinicClock};
pub use slots::{generate_time_slot_times, generate_time_slots, time_slot_options};
pub use validation::validate_upsert;
