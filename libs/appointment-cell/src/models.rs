// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked slot. Created only by the clinic's booking operation and never
/// modified afterwards; the clinic registry and the patient's history share
/// the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    /// 0-based creation order across the whole clinic.
    pub sequence: u64,
    pub patient_national_id: String,
    pub doctor_license: String,
    pub specialty: String,
    pub date_time: NaiveDateTime,
}

impl Appointment {
    pub fn new(request: &BookAppointmentRequest, sequence: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            patient_national_id: request.patient_national_id.clone(),
            doctor_license: request.doctor_license.clone(),
            specialty: request.specialty.clone(),
            date_time: request.date_time,
        }
    }

    /// Whether this appointment occupies the doctor's slot at `date_time`.
    pub fn occupies_doctor_slot(&self, license: &str, date_time: NaiveDateTime) -> bool {
        self.doctor_license == license && self.date_time == date_time
    }

    pub fn occupies_patient_slot(&self, national_id: &str, date_time: NaiveDateTime) -> bool {
        self.patient_national_id == national_id && self.date_time == date_time
    }
}

// Log-friendly summary; front-desk formatting follows the configured formats.
impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} ({}) for patient {}",
            self.date_time.format("%Y-%m-%d %H:%M"),
            self.doctor_license,
            self.specialty,
            self.patient_national_id
        )
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_national_id: String,
    pub doctor_license: String,
    pub specialty: String,
    pub date_time: NaiveDateTime,
}

impl BookAppointmentRequest {
    pub fn new(
        patient_national_id: &str,
        doctor_license: &str,
        specialty: &str,
        date_time: NaiveDateTime,
    ) -> Self {
        Self {
            patient_national_id: patient_national_id.to_string(),
            doctor_license: doctor_license.to_string(),
            specialty: specialty.to_string(),
            date_time,
        }
    }
}
