//! Product name validation

use super::validation::{bounded_text, ValidationError};

/// Maximum length for product names (matches `VARCHAR(50)`)
pub const MAX_PRODUCT_NAME_LEN: usize = 50;

/// Validated product name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 50 characters
    ///
    /// # Example
    /// ```
    /// use stockctl_server::models::ProductName;
    ///
    /// assert!(ProductName::new("Phones").is_ok());
    /// assert!(ProductName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text("name", s, MAX_PRODUCT_NAME_LEN).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ProductName::new("Phones").is_ok());
        assert!(ProductName::new("Смартфоны").is_ok());
        assert_eq!(ProductName::new(" Tablets ").unwrap().as_str(), "Tablets");
    }

    #[test]
    fn rejects_empty() {
        let err = ProductName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        assert!(ProductName::new(&"a".repeat(50)).is_ok());

        let err = ProductName::new(&"a".repeat(51)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }
}
