use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, NaiveDateTime};

use appointment_cell::models::Appointment;
use doctor_cell::models::{Doctor, Specialty};
use patient_cell::models::{MedicalHistory, Patient, Prescription};
use shared_config::AppConfig;
use shared_models::ClinicResult;

use crate::clinic::Clinic;

/// A clinic shared between threads. Every call holds one coarse lock for its
/// whole duration, so booking's conflict check and insert cannot interleave
/// with another booking. Reads hand back owned snapshots.
#[derive(Debug, Clone)]
pub struct SharedClinic {
    inner: Arc<Mutex<Clinic>>,
}

impl SharedClinic {
    pub fn new(config: AppConfig) -> Self {
        Self::from_clinic(Clinic::new(config))
    }

    pub fn from_clinic(clinic: Clinic) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clinic)),
        }
    }

    // Operations never leave the clinic half-written, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Clinic> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the clinic under the lock.
    pub fn with_clinic<R>(&self, f: impl FnOnce(&Clinic) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    pub fn register_patient(&self, patient: Patient) -> ClinicResult<()> {
        self.lock().register_patient(patient)
    }

    pub fn register_doctor(&self, doctor: Doctor) -> ClinicResult<()> {
        self.lock().register_doctor(doctor)
    }

    pub fn add_specialty_to_doctor(&self, license: &str, specialty: Specialty) -> ClinicResult<()> {
        self.lock().add_specialty_to_doctor(license, specialty)
    }

    pub fn book_appointment(
        &self,
        national_id: &str,
        license: &str,
        specialty: &str,
        date_time: NaiveDateTime,
    ) -> ClinicResult<Arc<Appointment>> {
        self.lock()
            .book_appointment(national_id, license, specialty, date_time)
    }

    pub fn issue_prescription<S: AsRef<str>>(
        &self,
        national_id: &str,
        license: &str,
        medications: &[S],
    ) -> ClinicResult<Prescription> {
        self.lock().issue_prescription(national_id, license, medications)
    }

    pub fn find_patient(&self, national_id: &str) -> ClinicResult<Patient> {
        self.lock().find_patient(national_id).cloned()
    }

    pub fn find_doctor(&self, license: &str) -> ClinicResult<Doctor> {
        self.lock().find_doctor(license).cloned()
    }

    pub fn get_medical_history(&self, national_id: &str) -> ClinicResult<MedicalHistory> {
        self.lock().get_medical_history(national_id).cloned()
    }

    pub fn list_appointments(&self) -> Vec<Arc<Appointment>> {
        self.lock().list_appointments().to_vec()
    }

    pub fn list_patients(&self) -> Vec<Patient> {
        self.lock().list_patients().to_vec()
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.lock().list_doctors().to_vec()
    }

    pub fn available_doctors(&self, specialty: &str, date: NaiveDate) -> Vec<Doctor> {
        self.lock()
            .available_doctors(specialty, date)
            .into_iter()
            .cloned()
            .collect()
    }
}
