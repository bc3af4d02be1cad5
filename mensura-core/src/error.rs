//! The single failure kind a conversion can produce
//!
//! Failures never cross the conversion boundary as panics. They are
//! values, folded into an [`Outcome`](crate::Outcome) so the caller
//! decides whether to escalate.

use thiserror::Error;

/// Error type for conversion lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No relationship is registered between the two units in the category.
    ///
    /// Covers unknown unit names, units that belong to a different
    /// category, and pairs with no registered rule.
    #[error("Invalid unit conversion: {from} to {to} in {category}")]
    InvalidConversion {
        from: String,
        to: String,
        category: String,
    },
}

impl ConvertError {
    /// Build an invalid-conversion error from normalized unit names and
    /// the canonical category name.
    pub fn invalid(
        from: impl Into<String>,
        to: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        ConvertError::InvalidConversion {
            from: from.into(),
            to: to.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let err = ConvertError::invalid("meters", "notaunit", "LENGTH");
        assert_eq!(
            err.to_string(),
            "Invalid unit conversion: meters to notaunit in LENGTH"
        );
    }

    #[test]
    fn test_message_carries_category_name() {
        let err = ConvertError::invalid("celsius", "feet", "TEMPERATURE");
        let msg = err.to_string();
        assert!(msg.contains("celsius"));
        assert!(msg.contains("feet"));
        assert!(msg.contains("TEMPERATURE"));
    }
}
