/// Errors from the inventory layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, formatting, or saving an inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The backing file is missing, unreadable, or unwritable.
    #[error("Cannot access inventory file '{}': {source}", path.display())]
    FileAccess {
        /// Path that was being read or written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not well-formed CSV.
    #[error("Malformed inventory file '{}': {source}", path.display())]
    Csv {
        /// Path of the offending file.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record lacks one of the five persisted fields.
    #[error("Record {row} is missing field '{field}'")]
    MissingField {
        /// 1-based record position.
        row: usize,
        /// Name of the absent column.
        field: &'static str,
    },

    /// A record carries a field outside the persisted column set.
    #[error("Record {row} has unexpected field '{field}'")]
    UnexpectedField {
        /// 1-based record position.
        row: usize,
        /// Name of the extra key.
        field: String,
    },

    /// No record has the requested name.
    #[error("No device named '{name}'")]
    DeviceNotFound {
        /// The searched name.
        name: String,
    },

    /// JSON rendering or parsing failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be rendered as a YAML scalar.
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl InventoryError {
    /// Whether this is one of the record-shape errors raised while saving.
    #[must_use]
    pub fn is_field_mapping(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::UnexpectedField { .. }
        )
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileAccess { .. } => 3,
            Self::DeviceNotFound { .. } => 4,
            Self::Csv { .. }
            | Self::MissingField { .. }
            | Self::UnexpectedField { .. }
            | Self::Json(_)
            | Self::Yaml(_) => 1,
        }
    }
}
