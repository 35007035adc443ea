use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use patient_cell::models::Prescription;
use shared_models::ClinicResult;

use crate::clinic::Clinic;

impl Clinic {
    /// Issue a prescription stamped with the current local time.
    ///
    /// The doctor needs no matching specialty and no prior appointment with
    /// the patient; only existence and the medication list are checked.
    pub fn issue_prescription<S: AsRef<str>>(
        &mut self,
        national_id: &str,
        license: &str,
        medications: &[S],
    ) -> ClinicResult<Prescription> {
        let now = Local::now().naive_local();
        self.issue_prescription_at(national_id, license, medications, now)
    }

    pub fn issue_prescription_at<S: AsRef<str>>(
        &mut self,
        national_id: &str,
        license: &str,
        medications: &[S],
        issued_at: NaiveDateTime,
    ) -> ClinicResult<Prescription> {
        let patient_index = self.patient_position(national_id)?;
        self.doctor_position(license)?;

        let prescription = Prescription::new(national_id, license, medications, issued_at)
            .inspect_err(|e| warn!("Rejecting prescription for patient {}: {}", national_id, e))?;

        info!(
            "Issuing prescription {} for patient {} by doctor {} ({} medications)",
            prescription.id,
            national_id,
            license,
            prescription.medications.len()
        );
        self.patients[patient_index].record_prescription(prescription.clone());
        Ok(prescription)
    }
}
