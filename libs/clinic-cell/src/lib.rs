pub mod clinic;
pub mod services;
pub mod shared;

pub use clinic::Clinic;
pub use shared::SharedClinic;

// Re-export the entity types callers need alongside the clinic.
pub use appointment_cell::models::{Appointment, BookAppointmentRequest};
pub use doctor_cell::models::{Doctor, Specialty, Weekday};
pub use patient_cell::models::{HistoryEntry, MedicalHistory, Patient, Prescription};
pub use shared_config::AppConfig;
pub use shared_models::{ClinicError, ClinicResult, UnavailableReason};
