use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a doctor cannot take a booking. Both cases surface as the single
/// `DoctorNotAvailable` kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    SpecialtyNotOffered,
    DayNotAttended(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::SpecialtyNotOffered => write!(f, "specialty not offered"),
            UnavailableReason::DayNotAttended(day) => write!(f, "does not attend on {}", day),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClinicError {
    #[error("Patient with national ID {national_id} already exists")]
    DuplicatePatient { national_id: String },

    #[error("Doctor with license {license} already exists")]
    DuplicateDoctor { license: String },

    #[error("Doctor {license} already has specialty {specialty}")]
    DuplicateSpecialty { license: String, specialty: String },

    #[error("Patient not found: {national_id}")]
    PatientNotFound { national_id: String },

    #[error("Doctor not found: {license}")]
    DoctorNotFound { license: String },

    #[error("Doctor {license} is not available for {specialty}: {reason}")]
    DoctorNotAvailable {
        license: String,
        specialty: String,
        reason: UnavailableReason,
    },

    #[error("Doctor {license} already has an appointment at {date_time}")]
    SlotOccupied {
        license: String,
        date_time: NaiveDateTime,
    },

    #[error("Patient {national_id} already has an appointment at {date_time}")]
    PatientDoubleBooked {
        national_id: String,
        date_time: NaiveDateTime,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid date or time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid prescription: {0}")]
    InvalidPrescription(String),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
