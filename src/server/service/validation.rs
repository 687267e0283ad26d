//! Field checks shared by the services.
//!
//! Violations are reported as `AppError::BadRequest` naming the offending field.

use crate::server::{error::AppError, model::scout::Contact};

pub fn require_not_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(())
}

/// Accepts an empty string or `local@domain` with both parts non-empty and no whitespace.
pub fn require_email_or_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Ok(());
    }

    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        return Err(AppError::BadRequest(format!(
            "{} must be a well-formed email address",
            field
        )));
    }

    Ok(())
}

/// Checks a scout's contact list: at least one entry, each with name and phone number.
pub fn validate_contacts(contacts: &[Contact]) -> Result<(), AppError> {
    if contacts.is_empty() {
        return Err(AppError::BadRequest(
            "contacts must not be empty".to_string(),
        ));
    }

    for (index, contact) in contacts.iter().enumerate() {
        require_not_blank(&contact.name, &format!("contacts[{}].name", index))?;
        require_not_blank(
            &contact.phone_number,
            &format!("contacts[{}].phone_number", index),
        )?;
        require_email_or_empty(&contact.email, &format!("contacts[{}].email", index))?;
    }

    Ok(())
}
