/// Serializable envelope for errors written to stderr.
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Offending field, for record-shape errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorOutput {
    /// Construct from an `InventoryError`.
    #[must_use]
    pub fn from_inventory_error(err: &InventoryError) -> Self {
        let (code, field) = match err {
            InventoryError::FileAccess { .. } => ("file_access", None),
            InventoryError::Csv { .. } => ("malformed_csv", None),
            InventoryError::MissingField { field, .. } => ("missing_field", Some((*field).to_owned())),
            InventoryError::UnexpectedField { field, .. } => ("unexpected_field", Some(field.clone())),
            InventoryError::DeviceNotFound { .. } => ("device_not_found", None),
            InventoryError::Json(_) | InventoryError::Yaml(_) => ("serialization", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                field,
            },
        }
    }
}
