// libs/doctor-cell/src/services/availability.rs

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use shared_models::{ClinicError, ClinicResult, UnavailableReason};

use crate::models::{Doctor, Specialty, Weekday};

/// Decides whether a doctor can see patients for a specialty at a given time.
#[derive(Debug, Default, Clone, Copy)]
pub struct AvailabilityService;

impl AvailabilityService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the doctor's specialty and confirm it is offered on the weekday
    /// of `date_time`. Both failures are reported as `DoctorNotAvailable`.
    pub fn check_availability<'d>(
        &self,
        doctor: &'d Doctor,
        specialty_name: &str,
        date_time: NaiveDateTime,
    ) -> ClinicResult<&'d Specialty> {
        debug!(
            "Checking availability of doctor {} for {} at {}",
            doctor.license(),
            specialty_name,
            date_time
        );

        let specialty = doctor.specialty(specialty_name).ok_or_else(|| {
            warn!("Doctor {} does not offer {}", doctor.license(), specialty_name);
            ClinicError::DoctorNotAvailable {
                license: doctor.license().to_string(),
                specialty: specialty_name.to_string(),
                reason: UnavailableReason::SpecialtyNotOffered,
            }
        })?;

        let day = Weekday::of(date_time.date());
        if !specialty.offered_on(day) {
            warn!(
                "Doctor {} does not attend {} on {}",
                doctor.license(),
                specialty_name,
                day
            );
            return Err(ClinicError::DoctorNotAvailable {
                license: doctor.license().to_string(),
                specialty: specialty_name.to_string(),
                reason: UnavailableReason::DayNotAttended(day.name().to_string()),
            });
        }

        Ok(specialty)
    }

    /// Doctors offering `specialty_name` on the weekday of `date`, in the order given.
    pub fn doctors_available_on<'d, I>(
        &self,
        doctors: I,
        specialty_name: &str,
        date: NaiveDate,
    ) -> Vec<&'d Doctor>
    where
        I: IntoIterator<Item = &'d Doctor>,
    {
        let day = Weekday::of(date);
        doctors
            .into_iter()
            .filter(|doctor| {
                doctor
                    .specialty(specialty_name)
                    .is_some_and(|specialty| specialty.offered_on(day))
            })
            .collect()
    }
}
