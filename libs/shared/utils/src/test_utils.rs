use chrono::{NaiveDate, NaiveDateTime};
use tracing_subscriber::EnvFilter;

use shared_config::AppConfig;

pub struct TestConfig {
    pub enforce_patient_exclusivity: bool,
    pub reject_future_birth_dates: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            enforce_patient_exclusivity: true,
            reject_future_birth_dates: false,
        }
    }
}

impl TestConfig {
    pub fn literal_source_policy() -> Self {
        Self {
            enforce_patient_exclusivity: false,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            enforce_patient_exclusivity: self.enforce_patient_exclusivity,
            reject_future_birth_dates: self.reject_future_birth_dates,
            ..AppConfig::default()
        }
    }
}

/// Install a test-writer subscriber honouring `RUST_LOG`. Safe to call from
/// every test; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid test time")
}

/// 2024-06-03 was a Monday.
pub fn monday_10am() -> NaiveDateTime {
    at(2024, 6, 3, 10, 0)
}

pub fn tuesday_10am() -> NaiveDateTime {
    at(2024, 6, 4, 10, 0)
}

pub fn wednesday_10am() -> NaiveDateTime {
    at(2024, 6, 5, 10, 0)
}
