//! services/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ServiceError, ServiceResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)+$",
    )
        .expect("email regex is valid")
});

pub fn require_non_empty(field: &str, value: &str) -> ServiceResult<()> {
    if value.is_empty() {
        return Err(ServiceError::validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> ServiceResult<()> {
    let valid = EMAIL_RE.is_match(value)
        && value
            .split('@')
            .next()
            .map(|local| !local.starts_with('.') && !local.ends_with('.') && !local.contains(".."))
            .unwrap_or(false);

    if !valid {
        return Err(ServiceError::validation(format!(
            "{} is not a valid email address: '{}'",
            field, value
        )));
    }
    Ok(())
}
