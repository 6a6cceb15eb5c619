//! API handlers module

pub mod companions;
pub mod hadiths;
pub mod health;
pub mod quiz;
pub mod sources;

use axum::extract::FromRequest;
use hadith_quiz_common::errors::{AppError, Result};
use validator::ValidationErrors;

/// JSON body extractor whose rejections render as `AppError` validation errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse a path id, rejecting anything that is not an integer
pub(crate) fn parse_id(raw: &str) -> Result<i32> {
    raw.trim().parse().map_err(|_| AppError::Validation {
        message: format!("Invalid ID: {}", raw),
        field: Some("id".to_string()),
    })
}

/// Convert validator output into a validation error naming the first bad field
pub(crate) fn validation_error(errors: ValidationErrors) -> AppError {
    let field = errors.field_errors().keys().next().map(|f| f.to_string());
    AppError::Validation {
        message: errors.to_string(),
        field,
    }
}

/// Rejects strings that are empty once trimmed
pub(crate) fn not_blank(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("text").is_ok());
        assert!(not_blank(" \t ").is_err());
    }
}
