//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its allowed range
    OutOfRange { field: &'static str, reason: &'static str },

    /// Field contains characters that cannot be stored
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `s` and check it is non-empty, free of control characters, and at
/// most `max` characters.
pub(crate) fn bounded_text(
    field: &'static str,
    s: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    // Postgres text cannot hold NUL
    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain control characters",
        });
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 50,
        };
        assert_eq!(err.to_string(), "name exceeds maximum length of 50 characters");

        let err = ValidationError::OutOfRange {
            field: "quantity",
            reason: "must be greater than zero",
        };
        assert_eq!(err.to_string(), "quantity: must be greater than zero");
    }

    #[test]
    fn bounded_text_counts_chars_not_bytes() {
        // 50 Cyrillic letters are 100 bytes
        let name = "ж".repeat(50);
        assert_eq!(bounded_text("name", &name, 50).unwrap(), name);
        assert!(bounded_text("name", &"ж".repeat(51), 50).is_err());
    }

    #[test]
    fn bounded_text_trims() {
        assert_eq!(bounded_text("name", "  Phones ", 50).unwrap(), "Phones");
        assert_eq!(
            bounded_text("name", "   ", 50).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }

    #[test]
    fn bounded_text_rejects_control_characters() {
        for input in ["a\u{0}b", "line\nbreak", "tab\there", "bell\u{7}"] {
            assert_eq!(
                bounded_text("name", input, 50).unwrap_err(),
                ValidationError::InvalidFormat {
                    field: "name",
                    reason: "must not contain control characters",
                },
                "{input:?}"
            );
        }
        assert_eq!(
            bounded_text("name", "Смартфон Galaxy S24", 50).unwrap(),
            "Смартфон Galaxy S24"
        );
    }
}
