//! Submitter (user) field validation.

use validator::ValidateEmail;

use crate::error::{FieldErrors, ValidationError};

/// Validate the name/email pair captured when a page is submitted.
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), ValidationError> {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.push("name", "name must not be empty");
    }
    if email.trim().is_empty() {
        errors.push("email", "email must not be empty");
    } else if !email.trim().validate_email() {
        errors.push("email", format!("'{email}' is not a valid email address"));
    }

    errors.into_result()
}
