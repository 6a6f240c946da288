//! # ods2sql
//!
//! Extract portable, deterministic SQL from OpenDocument spreadsheets that have
//! been instrumented with control markers in column A.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    .ods document                         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [ods]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Workbook: raw rows + style side table             │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sheet::expand, scan, coerce]
//! ┌─────────────────────────────────────────────────────────┐
//! │        TableBlocks (columns, types, literal rows)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [index, emit, sql]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Statements + warnings (sqlite/postgres/mysql)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Instrumentation
//!
//! ```text
//! sqltable   | people
//! sqlcolumn  | id      | name  | is_active
//! sqltype    | INT     | TEXT  | BOOLEAN
//!            | 1       | Alice | TRUE
//!            | 2       | Bob   | FALSE
//! ```

pub mod coerce;
pub mod config;
pub mod emit;
pub mod error;
pub mod index;
pub mod ods;
pub mod scan;
pub mod sheet;
pub mod sql;
pub mod warning;

use std::path::Path;

pub use config::{ConvertOptions, OutputMode, Settings, SettingsError};
pub use emit::{convert_blocks, convert_workbook, summarize_workbook, Conversion, TableSummary};
pub use error::{Error, Result, SchemaViolation};
pub use ods::{read_workbook, OdsError};
pub use scan::{Column, TableBlock};
pub use sql::{Dialect, Literal};
pub use warning::{Warning, WarningKind};

/// Read an `.ods` file and convert it.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<Conversion> {
    let workbook = read_workbook(path)?;
    convert_workbook(&workbook, options)
}
