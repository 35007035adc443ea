// libs/clinic-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use appointment_cell::models::{Appointment, BookAppointmentRequest};
use shared_models::ClinicResult;

use crate::clinic::Clinic;

impl Clinic {
    /// Book an appointment for a registered patient with a registered doctor.
    ///
    /// Checks run cheapest first and nothing is written until all pass:
    /// 1. patient exists (`PatientNotFound`)
    /// 2. doctor exists (`DoctorNotFound`)
    /// 3. doctor holds the specialty and offers it on that weekday (`DoctorNotAvailable`)
    /// 4. doctor slot is free (`SlotOccupied`), then, if enabled, the patient
    ///    slot is free (`PatientDoubleBooked`)
    ///
    /// The created appointment is stored in the clinic registry and appended
    /// to the patient's medical history.
    pub fn book_appointment(
        &mut self,
        national_id: &str,
        license: &str,
        specialty: &str,
        date_time: NaiveDateTime,
    ) -> ClinicResult<Arc<Appointment>> {
        let request = BookAppointmentRequest::new(national_id, license, specialty, date_time);
        self.book(&request)
    }

    pub fn book(&mut self, request: &BookAppointmentRequest) -> ClinicResult<Arc<Appointment>> {
        info!(
            "Booking appointment for patient {} with doctor {} ({}) at {}",
            request.patient_national_id, request.doctor_license, request.specialty, request.date_time
        );

        // **Step 1: Resolve patient and doctor**
        let patient_index = self.patient_position(&request.patient_national_id)?;
        let doctor_index = self.doctor_position(&request.doctor_license)?;

        // **Step 2: Specialty and weekday**
        self.availability.check_availability(
            &self.doctors[doctor_index],
            &request.specialty,
            request.date_time,
        )?;

        // **Step 3: Slot exclusivity**
        self.conflicts.check_conflicts(&self.appointments, request)?;

        // **Step 4: Commit**
        let sequence = self.appointments.len() as u64;
        let appointment = Arc::new(Appointment::new(request, sequence));
        self.appointments.push(Arc::clone(&appointment));
        self.patients[patient_index].record_appointment(Arc::clone(&appointment));

        info!(
            "Appointment {} booked (#{}) for patient {}",
            appointment.id, appointment.sequence, appointment.patient_national_id
        );
        Ok(appointment)
    }
}
