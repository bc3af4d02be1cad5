//! Conversion outcome record

use serde::{Deserialize, Serialize};

use crate::ConvertError;

/// The structured result of a conversion attempt
///
/// `value` is meaningful only when `success` is true. `message` is
/// populated only on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The converted value
    pub value: f64,
    /// Whether the conversion succeeded
    pub success: bool,
    /// Diagnostic message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    /// Successful conversion carrying the result
    pub fn ok(value: f64) -> Self {
        Outcome {
            value,
            success: true,
            message: None,
        }
    }

    /// Failed conversion carrying a diagnostic message
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome {
            value: 0.0,
            success: false,
            message: Some(message.into()),
        }
    }
}

impl From<ConvertError> for Outcome {
    fn from(err: ConvertError) -> Self {
        Outcome::fail(err.to_string())
    }
}
