use assert_matches::assert_matches;

use doctor_cell::models::{Doctor, Specialty, Weekday};
use shared_models::ClinicError;
use shared_utils::test_utils::date;

// ==============================================================================
// WEEKDAY PARSING
// ==============================================================================

#[test]
fn test_weekday_parse_is_case_and_whitespace_insensitive() {
    assert_eq!(Weekday::parse("  Monday ").unwrap(), Weekday::Monday);
    assert_eq!(Weekday::parse("WED").unwrap(), Weekday::Wednesday);
    assert_eq!(Weekday::parse("sunday").unwrap(), Weekday::Sunday);
}

#[test]
fn test_weekday_parse_accepts_spanish_with_and_without_accents() {
    assert_eq!(Weekday::parse("lunes").unwrap(), Weekday::Monday);
    assert_eq!(Weekday::parse("Miércoles").unwrap(), Weekday::Wednesday);
    assert_eq!(Weekday::parse("miercoles").unwrap(), Weekday::Wednesday);
    assert_eq!(Weekday::parse("SÁBADO").unwrap(), Weekday::Saturday);
    assert_eq!(Weekday::parse("sabado").unwrap(), Weekday::Saturday);
}

#[test]
fn test_weekday_parse_rejects_unknown_tokens() {
    assert_matches!(Weekday::parse("funday"), Err(ClinicError::InvalidData(_)));
    assert_matches!(Weekday::parse("   "), Err(ClinicError::InvalidData(_)));
}

#[test]
fn test_weekday_of_date() {
    assert_eq!(Weekday::of(date(2024, 6, 3)), Weekday::Monday);
    assert_eq!(Weekday::of(date(2024, 6, 4)), Weekday::Tuesday);
    assert_eq!(Weekday::of(date(2024, 6, 9)), Weekday::Sunday);
}

#[test]
fn test_weekday_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"friday\"");
    assert_eq!(Weekday::Friday.to_string(), "friday");
    assert_eq!(Weekday::Wednesday.spanish_name(), "miércoles");
}

// ==============================================================================
// SPECIALTY
// ==============================================================================

#[test]
fn test_specialty_collapses_duplicate_days() {
    let specialty = Specialty::new("Cardiologia", &["lunes", "Monday", " mon ", "wednesday"]).unwrap();
    assert_eq!(specialty.name(), "Cardiologia");
    assert_eq!(specialty.days().len(), 2);
    assert!(specialty.offered_on(Weekday::Monday));
    assert!(specialty.offered_on(Weekday::Wednesday));
    assert!(!specialty.offered_on(Weekday::Tuesday));
}

#[test]
fn test_specialty_requires_name_and_days() {
    assert_matches!(
        Specialty::new("  ", &["monday"]),
        Err(ClinicError::InvalidData(_))
    );
    let no_days: [&str; 0] = [];
    assert_matches!(
        Specialty::new("Pediatria", &no_days),
        Err(ClinicError::InvalidData(_))
    );
    assert_matches!(
        Specialty::from_days("Pediatria", Vec::new()),
        Err(ClinicError::InvalidData(_))
    );
}

#[test]
fn test_specialty_rejects_unknown_weekday_instead_of_ignoring_it() {
    assert_matches!(
        Specialty::new("Pediatria", &["monday", "someday"]),
        Err(ClinicError::InvalidData(msg)) if msg.contains("someday")
    );
}

// ==============================================================================
// DOCTOR
// ==============================================================================

#[test]
fn test_doctor_requires_name_and_license() {
    assert_matches!(Doctor::new("", "MP1"), Err(ClinicError::InvalidData(_)));
    assert_matches!(Doctor::new("Dr. Lopez", " "), Err(ClinicError::InvalidData(_)));
}

#[test]
fn test_doctor_rejects_duplicate_specialty_name() {
    let mut doctor = Doctor::new("Dr. Lopez", "MP1234").unwrap();
    doctor
        .add_specialty(Specialty::new("Cardiologia", &["monday"]).unwrap())
        .unwrap();

    let result = doctor.add_specialty(Specialty::new("Cardiologia", &["friday"]).unwrap());
    assert_matches!(
        result,
        Err(ClinicError::DuplicateSpecialty { license, specialty })
            if license == "MP1234" && specialty == "Cardiologia"
    );
    assert_eq!(doctor.specialties().len(), 1);

    // Names are case-sensitive.
    doctor
        .add_specialty(Specialty::new("cardiologia", &["friday"]).unwrap())
        .unwrap();
    assert_eq!(doctor.specialties().len(), 2);
}

#[test]
fn test_doctor_specialties_on_day() {
    let doctor = Doctor::new("Dr. Lopez", "MP1234")
        .and_then(|d| d.with_specialty(Specialty::new("Cardiologia", &["monday", "wednesday"])?))
        .and_then(|d| d.with_specialty(Specialty::new("Clinica", &["wednesday"])?))
        .unwrap();

    let wednesday: Vec<_> = doctor
        .specialties_on(Weekday::Wednesday)
        .map(|s| s.name())
        .collect();
    assert_eq!(wednesday, vec!["Cardiologia", "Clinica"]);
    assert!(doctor.attends_on(Weekday::Monday));
    assert!(!doctor.attends_on(Weekday::Sunday));
}

#[test]
fn test_doctor_validate_catches_deserialized_defects() {
    let doctor = Doctor::new("Dr. Lopez", "MP1234")
        .and_then(|d| d.with_specialty(Specialty::new("Cardiologia", &["monday"])?))
        .unwrap();
    assert!(doctor.validate().is_ok());

    let blank_license: Doctor =
        serde_json::from_str(r#"{"name":"Dr. Lopez","license":" ","specialties":[]}"#).unwrap();
    assert_matches!(blank_license.validate(), Err(ClinicError::InvalidData(_)));

    let repeated: Doctor = serde_json::from_str(
        r#"{"name":"Dr. Lopez","license":"MP1234","specialties":[
            {"name":"Clinica","days":["monday"]},
            {"name":"Clinica","days":["tuesday"]}]}"#,
    )
    .unwrap();
    assert_matches!(repeated.validate(), Err(ClinicError::DuplicateSpecialty { .. }));
}
