//! Model name and price validation

use rust_decimal::Decimal;

use super::validation::{bounded_text, ValidationError};

/// Maximum length for model names
pub const MAX_MODEL_NAME_LEN: usize = 50;

/// Fractional digits stored for a price (`NUMERIC(12, 2)`)
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price: ten integer digits
const MAX_PRICE_INTEGER_DIGITS: u32 = 10;

/// Validated model name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName(String);

impl ModelName {
    /// Create a new model name. Same rules as a product name.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text("name", s, MAX_MODEL_NAME_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    ///
    /// # Rules
    /// - Not negative
    /// - At most two fractional digits (trailing zeros are ignored)
    /// - Fits `NUMERIC(12, 2)`
    ///
    /// # Example
    /// ```
    /// use rust_decimal::Decimal;
    /// use stockctl_server::models::Price;
    ///
    /// assert!(Price::new(Decimal::new(19999, 2)).is_ok()); // 199.99
    /// assert!(Price::new(Decimal::new(-1, 0)).is_err());
    /// assert!(Price::new(Decimal::new(1999, 3)).is_err()); // 1.999
    /// ```
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must not be negative",
            });
        }

        let value = value.normalize();
        if value.scale() > PRICE_SCALE {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "must have at most two decimal places",
            });
        }

        if value.trunc() >= Decimal::from(10_i64.pow(MAX_PRICE_INTEGER_DIGITS)) {
            return Err(ValidationError::OutOfRange {
                field: "price",
                reason: "exceeds maximum price",
            });
        }

        Ok(Self(value.abs()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}
