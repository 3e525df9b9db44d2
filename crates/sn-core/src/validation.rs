//! Client-side checks run before any gateway call.

use crate::{CoreError, CoreResult, MIN_PASSWORD_LENGTH};

use chrono::NaiveDate;

use crate::timestamp::date_option::DATE_FORMAT;

#[track_caller]
pub fn validate_login(phone: &str, password: &str) -> CoreResult<()> {
    if is_blank(phone) || is_blank(password) {
        return Err(CoreError::validation("Fill in all fields"));
    }
    Ok(())
}

#[track_caller]
pub fn validate_registration(phone: &str, full_name: &str, password: &str) -> CoreResult<()> {
    if is_blank(phone) || is_blank(full_name) || is_blank(password) {
        return Err(CoreError::validation("Fill in all required fields"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` form value. Blank input means "not set".
#[track_caller]
pub fn parse_birth_date(text: &str) -> CoreResult<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::validation(format!("Birth date must look like YYYY-MM-DD, got '{text}'")))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
