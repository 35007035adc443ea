#![allow(dead_code)]

use clinic_cell::{Clinic, Doctor, Patient, Specialty};
use shared_utils::test_utils::{date, init_test_tracing, TestConfig};

pub const ANA: &str = "30111222";
pub const JUAN: &str = "28444555";
pub const LOPEZ: &str = "MP1234";
pub const PEREZ: &str = "MP5678";

pub fn ana() -> Patient {
    Patient::new("Ana Gomez", ANA, date(1990, 5, 10)).unwrap()
}

pub fn juan() -> Patient {
    Patient::new("Juan Diaz", JUAN, date(1985, 11, 2)).unwrap()
}

pub fn cardiology_mon_wed() -> Specialty {
    Specialty::new("Cardiologia", &["monday", "wednesday"]).unwrap()
}

pub fn dr_lopez() -> Doctor {
    Doctor::new("Dr. Lopez", LOPEZ)
        .and_then(|d| d.with_specialty(cardiology_mon_wed()))
        .unwrap()
}

pub fn dra_perez() -> Doctor {
    Doctor::new("Dra. Perez", PEREZ)
        .and_then(|d| d.with_specialty(Specialty::new("Pediatria", &["lunes", "viernes"])?))
        .unwrap()
}

/// Clinic with Ana and Juan registered, and Dr. Lopez (Cardiologia, Mon/Wed)
/// and Dra. Perez (Pediatria, Mon/Fri).
pub fn seeded_clinic(config: TestConfig) -> Clinic {
    init_test_tracing();
    let mut clinic = Clinic::new(config.to_app_config());
    clinic.register_patient(ana()).unwrap();
    clinic.register_patient(juan()).unwrap();
    clinic.register_doctor(dr_lopez()).unwrap();
    clinic.register_doctor(dra_perez()).unwrap();
    clinic
}
