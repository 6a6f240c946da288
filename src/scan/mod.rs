//! Block scanner.
//!
//! Walks the logical rows of a sheet and cuts them into [`TableBlock`]s. Column
//! A carries the control markers; everything to its right is payload.
//!
//! ```text
//! sqltable   | people
//! sqlcolumn  | id      | name  | is_active
//! sqltype    | INT     | TEXT  | BOOLEAN
//!            | 1       | Alice | TRUE
//! comment    | ignored
//!            | 2       | Bob   | FALSE
//! ```
//!
//! The scanner is a small state machine. Recoverable problems are reported as
//! warnings and scanning continues; duplicate column names abort the run.

pub mod markers;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::coerce::coerce;
use crate::error::SchemaViolation;
use crate::sheet::{expand_rows, is_blank_row, Cell, Row, Sheet, StyleTable, Workbook};
use crate::sql::Literal;
use crate::warning::Warning;

pub use markers::Marker;

/// Declared type used when a column has none.
pub const DEFAULT_TYPE: &str = "TEXT";

/// A column and its declared SQL type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub sql_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// One instrumented table found in a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub sheet: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Literal>>,
}

impl TableBlock {
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look a column up case-insensitively.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        let needle = name.trim().to_lowercase();
        self.columns.iter().find(|c| c.name.to_lowercase() == needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Searching,
    AwaitingColumns,
    AwaitingTypes,
    CollectingData,
}

/// A block under construction.
struct OpenBlock {
    name: String,
    /// Payload positions (0 = column B) that carry a column.
    positions: Vec<usize>,
    columns: Vec<Column>,
    rows: Vec<Vec<Literal>>,
}

struct Scanner<'a> {
    sheet: &'a str,
    styles: &'a StyleTable,
    state: State,
    open: Option<OpenBlock>,
    blocks: Vec<TableBlock>,
    warnings: &'a mut Vec<Warning>,
}

/// Text of every payload cell (column B onward), trimmed.
fn payload_texts(row: &[Cell]) -> Vec<String> {
    row.iter()
        .skip(1)
        .map(|c| c.text().trim().to_string())
        .collect()
}

impl<'a> Scanner<'a> {
    fn new(sheet: &'a str, styles: &'a StyleTable, warnings: &'a mut Vec<Warning>) -> Self {
        Self {
            sheet,
            styles,
            state: State::Searching,
            open: None,
            blocks: Vec::new(),
            warnings,
        }
    }

    fn table_name(&self) -> &str {
        self.open.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }

    fn warn(&mut self, message: String) {
        debug!(sheet = self.sheet, %message, "scanner warning");
        self.warnings.push(Warning::malformed(message));
    }

    fn warn_in_table(&mut self, what: &str) {
        let message = format!(
            "Sheet '{}', table '{}': {}",
            self.sheet,
            self.table_name(),
            what
        );
        self.warn(message);
    }

    fn row(&mut self, row: &[Cell]) -> Result<(), SchemaViolation> {
        if is_blank_row(row) {
            return Ok(());
        }

        let first = row.first();
        match markers::classify(first) {
            Some(Marker::Comment) => Ok(()),
            Some(Marker::Table) => {
                self.start_block(row);
                Ok(())
            }
            _ if self.state == State::Searching => Ok(()),
            Some(Marker::Columns) => self.columns_row(row),
            Some(Marker::Types) => {
                self.types_row(row);
                Ok(())
            }
            None if first.map_or(true, Cell::is_empty) => {
                self.data_row(row);
                Ok(())
            }
            None => {
                let text = first.map(Cell::text).unwrap_or("").trim().to_string();
                self.warn_in_table(&format!("stray row starting with '{text}' skipped."));
                Ok(())
            }
        }
    }

    fn start_block(&mut self, row: &[Cell]) {
        self.flush();
        let name = row
            .get(1)
            .map(|c| c.text().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            let message = format!(
                "Sheet '{}': sqltable row missing table name; block ignored.",
                self.sheet
            );
            self.warn(message);
            self.state = State::Searching;
            return;
        }
        debug!(sheet = self.sheet, table = %name, "opened block");
        self.open = Some(OpenBlock {
            name,
            positions: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
        });
        self.state = State::AwaitingColumns;
    }

    fn columns_row(&mut self, row: &[Cell]) -> Result<(), SchemaViolation> {
        if self.state != State::AwaitingColumns {
            self.warn_in_table("unexpected columns row; ignored.");
            return Ok(());
        }

        let headers = payload_texts(row);
        let positions: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty())
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            self.warn_in_table("empty columns row; block ignored.");
            self.open = None;
            self.state = State::Searching;
            return Ok(());
        }

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for &p in &positions {
            *counts.entry(headers[p].to_lowercase()).or_default() += 1;
        }
        let duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(name, _)| name)
            .collect();
        if !duplicates.is_empty() {
            return Err(SchemaViolation::DuplicateColumns {
                sheet: self.sheet.to_string(),
                table: self.table_name().to_string(),
                names: duplicates,
            });
        }

        if let Some(block) = self.open.as_mut() {
            block.columns = positions
                .iter()
                .map(|&p| Column::new(headers[p].clone(), DEFAULT_TYPE))
                .collect();
            block.positions = positions;
            debug!(
                sheet = self.sheet,
                table = %block.name,
                columns = block.columns.len(),
                "columns declared"
            );
        }
        self.state = State::AwaitingTypes;
        Ok(())
    }

    fn types_row(&mut self, row: &[Cell]) {
        match self.state {
            State::AwaitingColumns => {
                self.warn_in_table("types row before columns row; ignored.");
                return;
            }
            State::CollectingData => {
                self.warn_in_table("types row after data rows; ignored.");
                return;
            }
            State::Searching | State::AwaitingTypes => {}
        }

        let types = payload_texts(row);
        let mut extra = false;
        if let Some(block) = self.open.as_mut() {
            for (column, &p) in block.columns.iter_mut().zip(&block.positions) {
                let declared = types.get(p).map(String::as_str).unwrap_or("");
                column.sql_type = if declared.is_empty() {
                    DEFAULT_TYPE.to_string()
                } else {
                    declared.to_string()
                };
            }
            extra = types
                .iter()
                .enumerate()
                .any(|(i, t)| !t.is_empty() && !block.positions.contains(&i));
        }
        if extra {
            self.warn_in_table("types row has entries without a column; extra entries ignored.");
        }
        self.state = State::CollectingData;
    }

    fn data_row(&mut self, row: &[Cell]) {
        match self.state {
            State::AwaitingColumns => {
                self.warn_in_table("data row before columns row; ignored.");
                return;
            }
            State::AwaitingTypes => self.state = State::CollectingData,
            State::Searching | State::CollectingData => {}
        }

        let styles = self.styles;
        if let Some(block) = self.open.as_mut() {
            let values: Vec<Literal> = block
                .columns
                .iter()
                .zip(&block.positions)
                .map(|(column, &p)| match row.get(p + 1) {
                    Some(cell) => coerce(cell, &column.sql_type, styles),
                    None => Literal::Null,
                })
                .collect();
            if values.iter().all(Literal::is_null) {
                return;
            }
            block.rows.push(values);
        }
    }

    fn flush(&mut self) {
        let Some(block) = self.open.take() else {
            return;
        };
        self.state = State::Searching;
        if block.columns.is_empty() {
            let message = format!(
                "Sheet '{}', table '{}': no columns row; block dropped.",
                self.sheet, block.name
            );
            self.warn(message);
            return;
        }
        info!(
            sheet = self.sheet,
            table = %block.name,
            columns = block.columns.len(),
            rows = block.rows.len(),
            "found table"
        );
        self.blocks.push(TableBlock {
            sheet: self.sheet.to_string(),
            name: block.name,
            columns: block.columns,
            rows: block.rows,
        });
    }
}

/// Scan already-expanded rows of one sheet.
pub fn scan_rows(
    sheet: &str,
    rows: &[Row],
    styles: &StyleTable,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<TableBlock>, SchemaViolation> {
    let mut scanner = Scanner::new(sheet, styles, warnings);
    for row in rows {
        scanner.row(row)?;
    }
    scanner.flush();
    Ok(scanner.blocks)
}

/// Expand and scan one sheet.
pub fn scan_sheet(
    sheet: &Sheet,
    styles: &StyleTable,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<TableBlock>, SchemaViolation> {
    let rows = expand_rows(&sheet.rows);
    debug!(sheet = %sheet.name, rows = rows.len(), "scanning sheet");
    scan_rows(&sheet.name, &rows, styles, warnings)
}

/// Scan every sheet of a workbook in document order.
pub fn scan_workbook(
    workbook: &Workbook,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<TableBlock>, SchemaViolation> {
    let mut blocks = Vec::new();
    for sheet in &workbook.sheets {
        blocks.extend(scan_sheet(sheet, &workbook.styles, warnings)?);
    }
    Ok(blocks)
}
