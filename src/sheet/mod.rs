//! Normalized spreadsheet content.
//!
//! The types here are independent of the container format: the ODS reader
//! produces [`RawRow`]s and a [`StyleTable`], the [`expand`] pass turns raw rows
//! into logical [`Row`]s, and the block scanner consumes those.

pub mod cell;
pub mod expand;
pub mod styles;

pub use cell::{Cell, ValueType};
pub use expand::{expand_row, expand_rows, is_blank_row, RawCell, RawRow, Row};
pub use styles::{separator_for_language, PercentStyle, StyleTable, DEFAULT_PERCENT_DECIMALS};

/// One sheet of a document: its name and its raw (unexpanded) rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<RawRow>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Add a raw row.
    pub fn row(mut self, row: RawRow) -> Self {
        self.rows.push(row);
        self
    }
}

/// A whole document: sheets in document order plus the style side table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    pub styles: StyleTable,
}
