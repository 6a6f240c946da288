//! Control markers recognized in column A.

use crate::sheet::Cell;

/// What a first-column cell instructs the scanner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Starts a block; the adjacent cell names the table.
    Table,
    /// The row lists column names.
    Columns,
    /// The row lists declared SQL types.
    Types,
    /// The row is hidden from extraction.
    Comment,
}

/// Exact spelling of the comment marker. Not normalized.
pub const COMMENT: &str = "comment";

/// Normalized spellings (trimmed, lowercased) and the marker each selects.
const MARKERS: &[(&str, Marker)] = &[
    ("sqltable", Marker::Table),
    ("sqlcolumn", Marker::Columns),
    ("columns", Marker::Columns),
    ("column", Marker::Columns),
    ("fields", Marker::Columns),
    ("sqltype", Marker::Types),
    ("types", Marker::Types),
    ("type", Marker::Types),
];

/// Classify a text as a marker.
pub fn classify_text(text: &str) -> Option<Marker> {
    if text == COMMENT {
        return Some(Marker::Comment);
    }
    let normalized = text.trim().to_lowercase();
    MARKERS
        .iter()
        .find(|(spelling, _)| *spelling == normalized)
        .map(|(_, marker)| *marker)
}

/// Classify the first cell of a row.
pub fn classify(cell: Option<&Cell>) -> Option<Marker> {
    classify_text(cell?.text())
}
