use shared_models::{ClinicError, ClinicResult};

/// Trim `value` and reject it when nothing is left. `field` names the value in
/// the resulting `InvalidData` message.
pub fn require_non_empty(field: &str, value: &str) -> ClinicResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClinicError::InvalidData(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Split comma-separated input into trimmed tokens. Empty tokens are kept so
/// the caller can reject them instead of silently dropping them.
pub fn split_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|token| token.trim().to_string()).collect()
}
