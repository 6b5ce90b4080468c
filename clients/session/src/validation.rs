//! Client-side input validation
//!
//! Forms reject obviously invalid input locally, before any network call is
//! made. Messages are the user-facing strings rendered next to the field.

use std::sync::OnceLock;

use regex::Regex;

/// Validate a required field
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a new password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Please enter a password".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate that the password confirmation matches
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Validate a student verification code (six digits)
pub fn validate_student_code(code: &str) -> Result<(), String> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Verification code must be 6 digits".to_string());
    }
    Ok(())
}

/// Validate a rating: 0.5 to 5.0 in 0.5 increments
pub fn validate_rating(rating: f32) -> Result<(), String> {
    let doubled = rating * 2.0;
    let is_half_step = (doubled - doubled.round()).abs() < f32::EPSILON;
    if !(0.5..=5.0).contains(&rating) || !is_half_step {
        return Err("Rating must be between 0.5 and 5 in 0.5 increments".to_string());
    }
    Ok(())
}
