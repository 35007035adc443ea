use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use appointment_cell::models::Appointment;
use shared_config::AppConfig;
use shared_models::{ClinicError, ClinicResult};
use shared_utils::{parse_birth_date, require_non_empty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    name: String,
    national_id: String,
    birth_date: NaiveDate,
    history: MedicalHistory,
}

impl Patient {
    pub fn new(name: &str, national_id: &str, birth_date: NaiveDate) -> ClinicResult<Self> {
        Ok(Self {
            name: require_non_empty("patient name", name)?,
            national_id: require_non_empty("national ID", national_id)?,
            birth_date,
            history: MedicalHistory::default(),
        })
    }

    /// Build a patient from text as typed at the front desk, parsing the
    /// birth date with the configured date format.
    pub fn from_input(
        name: &str,
        national_id: &str,
        birth_date: &str,
        config: &AppConfig,
    ) -> ClinicResult<Self> {
        let birth_date = parse_birth_date(birth_date, config)?;
        Self::new(name, national_id, birth_date)
    }

    /// Re-check the constructor invariants on a patient that may have been
    /// deserialized: non-blank name and national ID.
    pub fn validate(&self) -> ClinicResult<()> {
        require_non_empty("patient name", &self.name)?;
        require_non_empty("national ID", &self.national_id)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    pub fn history(&self) -> &MedicalHistory {
        &self.history
    }

    /// Append a booked appointment. The clinic refuses to register a patient
    /// whose history is not empty, so entries recorded before registration
    /// never reach the clinic.
    pub fn record_appointment(&mut self, appointment: Arc<Appointment>) {
        self.history.entries.push(HistoryEntry::Appointment(appointment));
    }

    pub fn record_prescription(&mut self, prescription: Prescription) {
        self.history.entries.push(HistoryEntry::Prescription(prescription));
    }
}

// ==============================================================================
// PRESCRIPTIONS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_national_id: String,
    pub doctor_license: String,
    pub medications: Vec<String>,
    pub issued_at: NaiveDateTime,
}

impl Prescription {
    /// At least one medication is required and none may be blank.
    pub fn new<S: AsRef<str>>(
        patient_national_id: &str,
        doctor_license: &str,
        medications: &[S],
        issued_at: NaiveDateTime,
    ) -> ClinicResult<Self> {
        let medications = validate_medications(medications)?;
        Ok(Self {
            id: Uuid::new_v4(),
            patient_national_id: patient_national_id.to_string(),
            doctor_license: doctor_license.to_string(),
            medications,
            issued_at,
        })
    }
}

pub fn validate_medications<S: AsRef<str>>(medications: &[S]) -> ClinicResult<Vec<String>> {
    if medications.is_empty() {
        return Err(ClinicError::InvalidPrescription(
            "at least one medication is required".into(),
        ));
    }
    medications
        .iter()
        .enumerate()
        .map(|(index, medication)| {
            let medication = medication.as_ref().trim();
            if medication.is_empty() {
                Err(ClinicError::InvalidPrescription(format!(
                    "medication #{} is empty",
                    index + 1
                )))
            } else {
                Ok(medication.to_string())
            }
        })
        .collect()
}

// ==============================================================================
// MEDICAL HISTORY
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEntry {
    Appointment(Arc<Appointment>),
    Prescription(Prescription),
}

/// Append-only log of a patient's appointments and prescriptions, in the
/// order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    entries: Vec<HistoryEntry>,
}

impl MedicalHistory {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn appointments(&self) -> impl Iterator<Item = &Arc<Appointment>> {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Appointment(appointment) => Some(appointment),
            HistoryEntry::Prescription(_) => None,
        })
    }

    pub fn prescriptions(&self) -> impl Iterator<Item = &Prescription> {
        self.entries.iter().filter_map(|entry| match entry {
            HistoryEntry::Prescription(prescription) => Some(prescription),
            HistoryEntry::Appointment(_) => None,
        })
    }
}
