//! Local form validation, applied before any network traffic.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use super::error::ValidationError;
use crate::state::auth::{LoginInput, RegistrationInput};

/// Check the login form: both fields must be non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if either field is empty.
pub fn login(input: &LoginInput) -> Result<(), ValidationError> {
    if input.login.is_empty() || input.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Check the registration form: required fields, then password strength,
/// then confirmation — in that order, stopping at the first failure.
///
/// `first_name`, `last_name`, `phone`, and `bio` are optional.
///
/// # Errors
///
/// Returns the corresponding [`ValidationError`] for the first failed
/// check.
pub fn registration(input: &RegistrationInput) -> Result<(), ValidationError> {
    let required = [
        &input.email,
        &input.username,
        &input.password,
        &input.confirm_password,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    password_strength(&input.password)?;

    if input.password != input.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Password policy: at least 8 characters, with at least one ASCII letter
/// and at least one ASCII digit.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] or
/// [`ValidationError::PasswordNeedsLetterAndDigit`].
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::PasswordNeedsLetterAndDigit);
    }
    Ok(())
}
