//! Recoverable conditions reported alongside the output.
//!
//! A conversion never prints anything itself; every condition it recovers from
//! becomes exactly one [`Warning`] in the result, and the caller decides how to
//! show it.

use std::fmt;

use serde::Serialize;

/// Category of a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Instrumentation that cannot be used as written (missing table name,
    /// empty columns row, marker out of sequence, stray row, ...).
    MalformedInstrumentation,
    /// Something the dialect cannot express was skipped.
    DialectConstraintSkip,
    /// No tables to emit.
    EmptyResult,
    /// An option names a column the table does not have.
    UnknownColumn,
    /// A requested index duplicates the primary key.
    RedundantIndex,
    /// An option has no effect for the chosen dialect.
    IgnoredOption,
}

/// A single warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(WarningKind::MalformedInstrumentation, message)
    }

    pub fn dialect_skip(message: impl Into<String>) -> Self {
        Self::new(WarningKind::DialectConstraintSkip, message)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
