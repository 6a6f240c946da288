//! Style side table.
//!
//! Cells reference an automatic cell style by name; a cell style may point at a
//! data style, and percentage data styles carry the number of decimal places
//! and the locale used for rendering. The table is filled once while reading
//! the document and only read afterwards.

use std::collections::BTreeMap;

/// Languages whose conventional decimal separator is a comma.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl", "hr", "hu", "id",
    "is", "it", "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr",
    "sv", "tr", "uk", "vi",
];

/// Decimal places used when a percentage has no style information.
pub const DEFAULT_PERCENT_DECIMALS: u32 = 2;

/// Rendering hints of a percentage data style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentStyle {
    pub decimal_places: Option<u32>,
    pub decimal_separator: char,
}

impl Default for PercentStyle {
    fn default() -> Self {
        Self {
            decimal_places: None,
            decimal_separator: '.',
        }
    }
}

impl PercentStyle {
    pub fn new(decimal_places: Option<u32>, decimal_separator: char) -> Self {
        Self {
            decimal_places,
            decimal_separator,
        }
    }

    /// Decimal places, falling back to [`DEFAULT_PERCENT_DECIMALS`].
    pub fn places(&self) -> u32 {
        self.decimal_places.unwrap_or(DEFAULT_PERCENT_DECIMALS)
    }
}

/// Decimal separator for a `number:language` code (`"de"`, `"fr"`, ...).
pub fn separator_for_language(language: &str) -> char {
    let lang = language.trim().to_ascii_lowercase();
    if COMMA_DECIMAL_LANGUAGES.contains(&lang.as_str()) {
        ','
    } else {
        '.'
    }
}

/// Cell style → data style → percentage style lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    cell_to_data: BTreeMap<String, String>,
    percent_styles: BTreeMap<String, PercentStyle>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that cell style `cell_style` renders through `data_style`.
    pub fn insert_cell_style(&mut self, cell_style: impl Into<String>, data_style: impl Into<String>) {
        self.cell_to_data.insert(cell_style.into(), data_style.into());
    }

    /// Record a percentage data style.
    pub fn insert_percent_style(&mut self, data_style: impl Into<String>, style: PercentStyle) {
        self.percent_styles.insert(data_style.into(), style);
    }

    /// The percentage style a cell style resolves to, if any.
    pub fn percent_style(&self, cell_style: &str) -> Option<&PercentStyle> {
        let data = self.cell_to_data.get(cell_style)?;
        self.percent_styles.get(data)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_to_data.is_empty() && self.percent_styles.is_empty()
    }

    /// Fold another table into this one; entries already present win.
    pub fn merge(&mut self, other: StyleTable) {
        for (k, v) in other.cell_to_data {
            self.cell_to_data.entry(k).or_insert(v);
        }
        for (k, v) in other.percent_styles {
            self.percent_styles.entry(k).or_insert(v);
        }
    }
}
