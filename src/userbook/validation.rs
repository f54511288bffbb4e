//! Field validation for new records.
//!
//! Rules, checked in this order by [`validate_new_record`]:
//! - name: non-empty after trimming
//! - age: a whole number in `0..=150`
//! - email: contains both `@` and `.`
//!
//! Uniqueness of the email is checked against the stored records by the
//! `add` command, since it needs the current dataset.

use crate::error::ValidationError;
use crate::model::Record;
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<i64> = 0..=150;

/// Validates a name and returns it trimmed.
///
/// ```
/// use userbook::validation::validate_name;
///
/// assert_eq!(validate_name("  Ana ").unwrap(), "Ana");
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parses an age as typed by the user.
///
/// ```
/// use userbook::validation::parse_age;
///
/// assert_eq!(parse_age(" 42 ").unwrap(), 42);
/// assert!(parse_age("151").is_err());
/// assert!(parse_age("forty").is_err());
/// ```
pub fn parse_age(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    let age: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::AgeNotANumber(trimmed.to_string()))?;
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(age)
}

/// Validates an email and returns it trimmed. Only the presence of `@` and `.`
/// is checked.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

/// Builds a record from raw input, stopping at the first invalid field.
pub fn validate_new_record(
    name: &str,
    age: &str,
    email: &str,
) -> Result<Record, ValidationError> {
    let name = validate_name(name)?;
    let age = parse_age(age)?;
    let email = validate_email(email)?;
    Ok(Record::new(name, age, email))
}
