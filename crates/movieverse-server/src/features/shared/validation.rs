//! Shared validation utilities

use thiserror::Error;

/// Errors for fields that must carry text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequiredTextError {
    #[error("{field_name} is required")]
    Missing { field_name: String },
}

/// Rejects empty or whitespace-only input.
///
/// # Examples
///
/// ```rust,ignore
/// validate_required(&command.content, "Review text")?;
/// ```
pub fn validate_required(value: &str, field_name: &str) -> Result<(), RequiredTextError> {
    if value.trim().is_empty() {
        return Err(RequiredTextError::Missing {
            field_name: field_name.to_string(),
        });
    }
    Ok(())
}

/// Trims the value and maps blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
