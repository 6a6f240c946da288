//! Fatal errors.

use crate::config::SettingsError;
use crate::ods::OdsError;

/// The document's instrumentation is internally inconsistent; nothing can be
/// emitted for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("Sheet '{sheet}', table '{table}': duplicate column names: {}", names.join(", "))]
    DuplicateColumns {
        sheet: String,
        table: String,
        names: Vec<String>,
    },
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("Failed to read document: {0}")]
    Ods(#[from] OdsError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
