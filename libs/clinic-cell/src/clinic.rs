// libs/clinic-cell/src/clinic.rs
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use appointment_cell::models::Appointment;
use appointment_cell::services::ConflictDetectionService;
use doctor_cell::models::{Doctor, Specialty};
use doctor_cell::services::AvailabilityService;
use patient_cell::models::{MedicalHistory, Patient};
use shared_config::AppConfig;
use shared_models::{ClinicError, ClinicResult};

/// Owns every patient, doctor and booked appointment of a single clinic and
/// enforces the rules that span them.
///
/// Each operation either fully succeeds or leaves the clinic untouched.
#[derive(Debug)]
pub struct Clinic {
    pub(crate) config: AppConfig,
    pub(crate) patients: Vec<Patient>,
    pub(crate) patient_index: HashMap<String, usize>,
    pub(crate) doctors: Vec<Doctor>,
    pub(crate) doctor_index: HashMap<String, usize>,
    pub(crate) appointments: Vec<Arc<Appointment>>,
    pub(crate) availability: AvailabilityService,
    pub(crate) conflicts: ConflictDetectionService,
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Clinic {
    pub fn new(config: AppConfig) -> Self {
        let conflicts = ConflictDetectionService::new(&config);
        Self {
            config,
            patients: Vec::new(),
            patient_index: HashMap::new(),
            doctors: Vec::new(),
            doctor_index: HashMap::new(),
            appointments: Vec::new(),
            availability: AvailabilityService::new(),
            conflicts,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ==============================================================================
    // REGISTRATION
    // ==============================================================================

    /// A new patient must carry valid identity fields and an empty history;
    /// history only grows through booking and prescription issuance.
    pub fn register_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        patient.validate()?;
        if !patient.history().is_empty() {
            warn!("Rejecting patient {} with pre-filled history", patient.national_id());
            return Err(ClinicError::InvalidData(format!(
                "patient {} must be registered with an empty medical history",
                patient.national_id()
            )));
        }

        if self.patient_index.contains_key(patient.national_id()) {
            warn!("Rejecting duplicate patient {}", patient.national_id());
            return Err(ClinicError::DuplicatePatient {
                national_id: patient.national_id().to_string(),
            });
        }

        if self.config.reject_future_birth_dates {
            let today = Local::now().date_naive();
            if patient.birth_date() > today {
                return Err(ClinicError::InvalidData(format!(
                    "birth date {} is in the future",
                    patient.birth_date()
                )));
            }
        }

        info!("Registering patient {}", patient.national_id());
        self.patient_index
            .insert(patient.national_id().to_string(), self.patients.len());
        self.patients.push(patient);
        Ok(())
    }

    pub fn register_doctor(&mut self, doctor: Doctor) -> ClinicResult<()> {
        doctor.validate()?;

        if self.doctor_index.contains_key(doctor.license()) {
            warn!("Rejecting duplicate doctor {}", doctor.license());
            return Err(ClinicError::DuplicateDoctor {
                license: doctor.license().to_string(),
            });
        }

        info!(
            "Registering doctor {} with {} specialties",
            doctor.license(),
            doctor.specialties().len()
        );
        self.doctor_index
            .insert(doctor.license().to_string(), self.doctors.len());
        self.doctors.push(doctor);
        Ok(())
    }

    /// Checks run in order: doctor exists, specialty name not yet held,
    /// specialty well-formed.
    pub fn add_specialty_to_doctor(&mut self, license: &str, specialty: Specialty) -> ClinicResult<()> {
        let index = self.doctor_position(license)?;
        self.doctors[index].add_specialty(specialty)?;
        info!("Added specialty to doctor {}", license);
        Ok(())
    }

    // ==============================================================================
    // LOOKUPS AND QUERIES
    // ==============================================================================

    pub fn find_patient(&self, national_id: &str) -> ClinicResult<&Patient> {
        let index = self.patient_position(national_id)?;
        Ok(&self.patients[index])
    }

    pub fn find_doctor(&self, license: &str) -> ClinicResult<&Doctor> {
        let index = self.doctor_position(license)?;
        Ok(&self.doctors[index])
    }

    pub fn get_medical_history(&self, national_id: &str) -> ClinicResult<&MedicalHistory> {
        Ok(self.find_patient(national_id)?.history())
    }

    pub fn list_patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn list_appointments(&self) -> &[Arc<Appointment>] {
        &self.appointments
    }

    pub fn appointments_for_doctor(&self, license: &str) -> ClinicResult<Vec<Arc<Appointment>>> {
        self.doctor_position(license)?;
        Ok(self
            .appointments
            .iter()
            .filter(|apt| apt.doctor_license == license)
            .cloned()
            .collect())
    }

    pub fn appointments_for_patient(&self, national_id: &str) -> ClinicResult<Vec<Arc<Appointment>>> {
        self.patient_position(national_id)?;
        Ok(self
            .appointments
            .iter()
            .filter(|apt| apt.patient_national_id == national_id)
            .cloned()
            .collect())
    }

    /// Doctors offering `specialty` on the weekday of `date`, in registration order.
    pub fn available_doctors(&self, specialty: &str, date: NaiveDate) -> Vec<&Doctor> {
        self.availability
            .doctors_available_on(&self.doctors, specialty, date)
    }

    pub(crate) fn patient_position(&self, national_id: &str) -> ClinicResult<usize> {
        debug!("Looking up patient {}", national_id);
        self.patient_index
            .get(national_id)
            .copied()
            .ok_or_else(|| ClinicError::PatientNotFound {
                national_id: national_id.to_string(),
            })
    }

    pub(crate) fn doctor_position(&self, license: &str) -> ClinicResult<usize> {
        debug!("Looking up doctor {}", license);
        self.doctor_index
            .get(license)
            .copied()
            .ok_or_else(|| ClinicError::DoctorNotFound {
                license: license.to_string(),
            })
    }
}
