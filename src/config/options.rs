//! Resolved conversion options.

use std::collections::BTreeSet;

use crate::sql::Dialect;

/// Rows per INSERT statement unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Which statement families to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// DDL and data.
    #[default]
    Full,
    /// DROP/CREATE TABLE and CREATE INDEX only.
    SchemaOnly,
    /// INSERT only.
    DataOnly,
}

impl OutputMode {
    pub fn emits_schema(self) -> bool {
        self != OutputMode::DataOnly
    }

    pub fn emits_data(self) -> bool {
        self != OutputMode::SchemaOnly
    }
}

/// Everything a conversion needs besides the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub dialect: Dialect,
    /// Rows per INSERT; 0 and 1 both mean one row per statement.
    pub batch_size: usize,
    /// Wrap the whole script in `BEGIN;` / `COMMIT;` where the dialect allows.
    pub wrap_transaction: bool,
    pub if_not_exists: bool,
    pub emit_drop: bool,
    pub mode: OutputMode,
    /// Table names to keep (exact match); empty keeps every table.
    pub table_filter: BTreeSet<String>,
    /// Create indexes at all. When off, composite indexes are suppressed too.
    pub default_indices: bool,
    /// Restrict per-column indexes to these columns; empty means all non-PK columns.
    pub index_columns: Vec<String>,
    /// Composite indexes, each an ordered column list.
    pub composite_indexes: Vec<Vec<String>>,
    /// PRIMARY KEY columns, in order.
    pub primary_key: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            wrap_transaction: false,
            if_not_exists: false,
            emit_drop: true,
            mode: OutputMode::Full,
            table_filter: BTreeSet::new(),
            default_indices: true,
            index_columns: Vec::new(),
            composite_indexes: Vec::new(),
            primary_key: Vec::new(),
        }
    }
}

impl ConvertOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Rows per INSERT statement, at least 1.
    pub fn rows_per_insert(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Trim, drop blanks and de-duplicate (first occurrence wins) a list of
/// column names. Entries may themselves be comma-separated.
pub fn parse_column_list<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        for name in item.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
    }
    out
}

/// Parse a composite index spec: `"a+b"` → `["a", "b"]`.
pub fn parse_composite(spec: &str) -> Vec<String> {
    spec.split('+')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
