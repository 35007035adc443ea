use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// chrono format used for dates typed by staff (birth dates, appointment dates).
    pub date_format: String,
    /// chrono format used for the time-of-day part of an appointment.
    pub time_format: String,
    /// Reject a booking when the patient already holds an appointment at the
    /// same date-time with any doctor.
    pub enforce_patient_exclusivity: bool,
    /// Reject patients whose birth date lies after today.
    pub reject_future_birth_dates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            enforce_patient_exclusivity: true,
            reject_future_birth_dates: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup, falling back to
    /// the defaults for anything missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            date_format: lookup("CLINIC_DATE_FORMAT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| {
                    warn!("CLINIC_DATE_FORMAT not set, using default");
                    defaults.date_format.clone()
                }),
            time_format: lookup("CLINIC_TIME_FORMAT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| {
                    warn!("CLINIC_TIME_FORMAT not set, using default");
                    defaults.time_format.clone()
                }),
            enforce_patient_exclusivity: flag(
                &lookup,
                "CLINIC_ENFORCE_PATIENT_EXCLUSIVITY",
                defaults.enforce_patient_exclusivity,
            ),
            reject_future_birth_dates: flag(
                &lookup,
                "CLINIC_REJECT_FUTURE_BIRTH_DATES",
                defaults.reject_future_birth_dates,
            ),
        }
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!("{} has unrecognised value {:?}, using default {}", key, raw, default);
                default
            }
        },
    }
}
