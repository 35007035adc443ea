use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::{ClinicError, ClinicResult};

/// Combine a date and a time-of-day typed separately into one naive local
/// date-time, using the configured formats.
pub fn parse_date_time(date: &str, time: &str, config: &AppConfig) -> ClinicResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), &config.date_format).map_err(|e| {
        debug!("Rejecting appointment date {:?}: {}", date, e);
        ClinicError::InvalidDateTime(format!(
            "date {:?} does not match format {}",
            date.trim(),
            config.date_format
        ))
    })?;
    let time = NaiveTime::parse_from_str(time.trim(), &config.time_format).map_err(|e| {
        debug!("Rejecting appointment time {:?}: {}", time, e);
        ClinicError::InvalidDateTime(format!(
            "time {:?} does not match format {}",
            time.trim(),
            config.time_format
        ))
    })?;
    Ok(date.and_time(time))
}

/// Birth dates are patient data, so a malformed one is `InvalidData` rather
/// than `InvalidDateTime`.
pub fn parse_birth_date(input: &str, config: &AppConfig) -> ClinicResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), &config.date_format).map_err(|_| {
        ClinicError::InvalidData(format!(
            "birth date {:?} does not match format {}",
            input.trim(),
            config.date_format
        ))
    })
}
