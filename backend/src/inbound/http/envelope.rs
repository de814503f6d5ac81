//! Response envelopes wrapping every JSON body.
//!
//! ```text
//! {"success":true,"data":{...}}
//! {"success":false,"error":"Validation failed","details":["Name is required"]}
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope carrying a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Always `true`.
    pub success: bool,
    /// Response payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    #[schema(example = false)]
    pub success: bool,
    /// Short description of the failure.
    #[schema(example = "Email already exists")]
    pub error: String,
    /// Itemised reasons, present for validation and internal failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorEnvelope {
    /// Build a failure envelope.
    pub fn new(error: impl Into<String>, details: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_wraps_data() {
        let value = serde_json::to_value(Envelope::new(vec![1, 2])).expect("serialise");
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn failure_envelope_omits_absent_details() {
        let value =
            serde_json::to_value(ErrorEnvelope::new("User not found", None)).expect("serialise");
        assert_eq!(value, json!({ "success": false, "error": "User not found" }));
    }

    #[test]
    fn failure_envelope_lists_details() {
        let envelope = ErrorEnvelope::new(
            "Validation failed",
            Some(vec!["Name is required".to_owned()]),
        );
        let value = serde_json::to_value(envelope).expect("serialise");
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Validation failed",
                "details": ["Name is required"],
            })
        );
    }
}
