//! Row expansion.
//!
//! Spreadsheet formats store repeated cells and rows compactly with a repeat
//! count. Expansion turns those into the logical grid the scanner walks, with
//! two caps so that pathological repeat counts never materialize:
//!
//! - empty cells are only expanded when a non-empty cell follows them, so the
//!   trailing filler run that ends most rows disappears;
//! - a run of fully-empty rows, however long and however it is encoded,
//!   collapses to a single empty row.

use tracing::trace;

use super::cell::Cell;

/// A logical row after expansion.
pub type Row = Vec<Cell>;

/// A cell with its column repeat count.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCell {
    pub cell: Cell,
    pub repeat: usize,
}

impl RawCell {
    pub fn new(cell: Cell) -> Self {
        Self { cell, repeat: 1 }
    }

    /// Set the repeat count (values below 1 are treated as 1).
    pub fn repeated(mut self, n: usize) -> Self {
        self.repeat = n.max(1);
        self
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell::new(cell)
    }
}

/// A row with its row repeat count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub cells: Vec<RawCell>,
    pub repeat: usize,
}

impl RawRow {
    pub fn new(cells: impl IntoIterator<Item = impl Into<RawCell>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            repeat: 1,
        }
    }

    /// Set the repeat count (values below 1 are treated as 1).
    pub fn repeated(mut self, n: usize) -> Self {
        self.repeat = n.max(1);
        self
    }
}

/// Expand the cells of a single row.
///
/// Each cell appears `repeat` times in order; trailing empty cells are dropped.
pub fn expand_row(raw: &RawRow) -> Row {
    let mut row = Vec::new();
    let mut pending_empty: Vec<(&Cell, usize)> = Vec::new();

    for rc in &raw.cells {
        if rc.cell.is_empty() {
            pending_empty.push((&rc.cell, rc.repeat.max(1)));
            continue;
        }
        for (cell, n) in pending_empty.drain(..) {
            row.extend(std::iter::repeat(cell).take(n).cloned());
        }
        row.extend(std::iter::repeat(&rc.cell).take(rc.repeat.max(1)).cloned());
    }

    row
}

/// Whether every cell of an expanded row is empty.
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

/// Expand a sequence of raw rows into logical rows.
///
/// Rows are repeated `repeat` times; consecutive fully-empty rows collapse into
/// a single empty representative.
pub fn expand_rows<'a>(raw_rows: impl IntoIterator<Item = &'a RawRow>) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut last_blank = false;

    for raw in raw_rows {
        let row = expand_row(raw);
        if is_blank_row(&row) {
            if !last_blank {
                rows.push(row);
            }
            if raw.repeat > 1 {
                trace!(repeat = raw.repeat, "collapsed repeated empty row");
            }
            last_blank = true;
            continue;
        }
        last_blank = false;
        for _ in 1..raw.repeat.max(1) {
            rows.push(row.clone());
        }
        rows.push(row);
    }

    rows
}
