//! Receipt field validation

use super::validation::{bounded_text, ValidationError};

/// Maximum length for the acceptor's name
pub const MAX_ACCEPTOR_LEN: usize = 50;

/// Validated intake quantity (strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i32);

impl Quantity {
    /// # Example
    /// ```
    /// use stockctl_server::models::Quantity;
    ///
    /// assert!(Quantity::new(12).is_ok());
    /// assert!(Quantity::new(0).is_err());
    /// ```
    pub fn new(n: i32) -> Result<Self, ValidationError> {
        if n <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "quantity",
                reason: "must be greater than zero",
            });
        }

        Ok(Self(n))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Name of the person who accepted the delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptorName(String);

impl AcceptorName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text("whoAccepted", s, MAX_ACCEPTOR_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AcceptorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
