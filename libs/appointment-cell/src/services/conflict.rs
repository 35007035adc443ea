use std::sync::Arc;

use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::{ClinicError, ClinicResult};

use crate::models::{Appointment, BookAppointmentRequest};

/// Slot exclusivity over the clinic's booked appointments. A doctor slot is
/// always exclusive; a patient slot is exclusive when the configuration asks
/// for it.
#[derive(Debug, Clone)]
pub struct ConflictDetectionService {
    enforce_patient_exclusivity: bool,
}

impl ConflictDetectionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            enforce_patient_exclusivity: config.enforce_patient_exclusivity,
        }
    }

    /// Check the request against every existing appointment. The doctor slot
    /// is checked first so `SlotOccupied` wins when both would apply.
    pub fn check_conflicts(
        &self,
        existing: &[Arc<Appointment>],
        request: &BookAppointmentRequest,
    ) -> ClinicResult<()> {
        debug!(
            "Checking conflicts for doctor {} and patient {} at {} against {} appointments",
            request.doctor_license,
            request.patient_national_id,
            request.date_time,
            existing.len()
        );

        if let Some(taken) = self.find_doctor_conflict(existing, request) {
            warn!(
                "Slot {} for doctor {} already taken by appointment {}",
                request.date_time, request.doctor_license, taken.id
            );
            return Err(ClinicError::SlotOccupied {
                license: request.doctor_license.clone(),
                date_time: request.date_time,
            });
        }

        if self.enforce_patient_exclusivity {
            if let Some(taken) = existing
                .iter()
                .find(|apt| apt.occupies_patient_slot(&request.patient_national_id, request.date_time))
            {
                warn!(
                    "Patient {} already booked at {} (appointment {})",
                    request.patient_national_id, request.date_time, taken.id
                );
                return Err(ClinicError::PatientDoubleBooked {
                    national_id: request.patient_national_id.clone(),
                    date_time: request.date_time,
                });
            }
        }

        Ok(())
    }

    fn find_doctor_conflict<'a>(
        &self,
        existing: &'a [Arc<Appointment>],
        request: &BookAppointmentRequest,
    ) -> Option<&'a Arc<Appointment>> {
        existing
            .iter()
            .find(|apt| apt.occupies_doctor_slot(&request.doctor_license, request.date_time))
    }
}
