//! Field validation for the user details form
//!
//! All checks are pure functions. `validate` runs them in a fixed order and
//! stops at the first failure, so a submit attempt yields at most one error.

use super::form::FormState;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Why a submit attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    MissingField,
    #[error("Invalid email. Please check your email address.")]
    InvalidEmail,
    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    InvalidPhone,
    #[error("Invalid date of birth. Date of birth cannot be in the future.")]
    FutureDateOfBirth,
}

impl ValidationError {
    /// Short name used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing_field",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidPhone => "invalid_phone",
            ValidationError::FutureDateOfBirth => "future_dob",
        }
    }
}

/// Phone numbers must be exactly this many characters
pub const PHONE_LENGTH: usize = 10;

pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}

/// Length check only; the characters themselves are not inspected
///
/// Counts Unicode scalar values, so a character outside the BMP counts
/// once rather than as a UTF-16 surrogate pair.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().count() == PHONE_LENGTH
}

/// Parse a date of birth as a point in time
///
/// Accepts a plain `YYYY-MM-DD` date (taken as midnight UTC) or a full
/// RFC 3339 timestamp.
pub fn parse_dob(dob: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(dob)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// True iff `dob` parses and is not later than `now`
pub fn validate_dob_at(dob: &str, now: DateTime<Utc>) -> bool {
    parse_dob(dob).is_some_and(|parsed| parsed <= now)
}

pub fn validate_dob(dob: &str) -> bool {
    validate_dob_at(dob, Utc::now())
}

/// Run the checks in order, stopping at the first failure
fn run_checks(
    form: &FormState,
    dob_ok: impl Fn(&str) -> bool,
) -> Result<(), ValidationError> {
    if !form.is_complete() {
        return Err(ValidationError::MissingField);
    }
    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if !dob_ok(&form.dob) {
        return Err(ValidationError::FutureDateOfBirth);
    }
    Ok(())
}

/// Validate `form`, checking the date of birth against the current time
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    run_checks(form, validate_dob)
}
