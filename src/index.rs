//! Index planning.
//!
//! Decides which `CREATE INDEX` statements a table gets from its columns, the
//! declared primary key, the index options and the dialect. The plan never
//! contains an index whose column set equals the primary key, nor the same
//! ordered column list twice.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::ConvertOptions;
use crate::scan::TableBlock;
use crate::sql::{sanitize_identifier, slug, DialectProfile};
use crate::warning::{Warning, WarningKind};

/// A planned index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: String,
    pub columns: Vec<String>,
}

impl IndexSpec {
    /// Build an index on `columns` of `table` with a generated name:
    /// `ix_<table>_<col1>_<col2>...`, limited to the dialect's identifier length.
    pub fn new(table: &str, columns: Vec<String>, profile: &DialectProfile) -> Self {
        let mut candidate = format!("ix_{}", slug(table));
        for column in &columns {
            candidate.push('_');
            candidate.push_str(&slug(column));
        }
        Self {
            name: sanitize_identifier(&candidate, profile),
            columns,
        }
    }
}

/// Resolve requested names against the block's columns.
///
/// Matching is case-insensitive and yields the block's spelling. Unknown names
/// are dropped and reported with one warning naming all of them.
fn resolve_columns(
    block: &TableBlock,
    requested: &[String],
    what: &str,
    warnings: &mut Vec<Warning>,
) -> Vec<String> {
    let mut resolved = Vec::new();
    let mut unknown = Vec::new();
    for name in requested {
        match block.find_column(name) {
            Some(col) => resolved.push(col.name.clone()),
            None => unknown.push(name.as_str()),
        }
    }
    if !unknown.is_empty() {
        warnings.push(Warning::new(
            WarningKind::UnknownColumn,
            format!(
                "Table '{}': unknown {}: {}",
                block.name,
                what,
                unknown.join(", ")
            ),
        ));
    }
    resolved
}

/// The primary key columns that exist in `block`, in requested order.
pub fn resolve_primary_key(
    block: &TableBlock,
    requested: &[String],
    warnings: &mut Vec<Warning>,
) -> Vec<String> {
    let mut pk = resolve_columns(block, requested, "PRIMARY KEY columns", warnings);
    let mut seen = BTreeSet::new();
    pk.retain(|c| seen.insert(c.clone()));
    pk
}

fn column_set(columns: &[String]) -> BTreeSet<&str> {
    columns.iter().map(String::as_str).collect()
}

/// Plan the indexes of one table.
///
/// `primary_key` must already be resolved against the block
/// (see [`resolve_primary_key`]).
pub fn plan_indexes(
    block: &TableBlock,
    primary_key: &[String],
    options: &ConvertOptions,
    profile: &DialectProfile,
    warnings: &mut Vec<Warning>,
) -> Vec<IndexSpec> {
    if !options.default_indices {
        return Vec::new();
    }

    let pk_set = column_set(primary_key);
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut plan = Vec::new();

    // Per-column indexes
    let candidates: Vec<String> = if options.index_columns.is_empty() {
        block.column_names().map(str::to_string).collect()
    } else {
        resolve_columns(block, &options.index_columns, "columns for indexing", warnings)
    };
    for column in candidates {
        if pk_set.contains(column.as_str()) {
            continue;
        }
        let columns = vec![column];
        if seen.contains(&columns) {
            continue;
        }
        if let Some(blocked) = text_blob_columns(block, &columns, profile).pop() {
            warnings.push(Warning::dialect_skip(format!(
                "Table '{}': skipping {} index on TEXT/BLOB column: {}",
                block.name, profile.name, blocked
            )));
            seen.insert(columns);
            continue;
        }
        seen.insert(columns.clone());
        plan.push(IndexSpec::new(&block.name, columns, profile));
    }

    // Composite indexes
    for spec in &options.composite_indexes {
        let what = format!("columns in index '{}'", spec.join("+"));
        let columns = resolve_columns(block, spec, &what, warnings);
        if columns.is_empty() || seen.contains(&columns) {
            continue;
        }
        if !pk_set.is_empty() && column_set(&columns) == pk_set {
            warnings.push(Warning::new(
                WarningKind::RedundantIndex,
                format!(
                    "Table '{}': index on ({}) duplicates the PRIMARY KEY; skipped.",
                    block.name,
                    columns.join(", ")
                ),
            ));
            seen.insert(columns);
            continue;
        }
        let blocked = text_blob_columns(block, &columns, profile);
        if !blocked.is_empty() {
            warnings.push(Warning::dialect_skip(format!(
                "Table '{}': skipping {} index on TEXT/BLOB columns: {}",
                block.name,
                profile.name,
                blocked.join(", ")
            )));
            seen.insert(columns);
            continue;
        }
        seen.insert(columns.clone());
        plan.push(IndexSpec::new(&block.name, columns, profile));
    }

    debug!(table = %block.name, indexes = plan.len(), "planned indexes");
    plan
}

/// Columns of `columns` the dialect cannot index without a prefix length.
fn text_blob_columns(
    block: &TableBlock,
    columns: &[String],
    profile: &DialectProfile,
) -> Vec<String> {
    columns
        .iter()
        .filter(|name| {
            block
                .find_column(name)
                .is_some_and(|c| profile.is_text_blob(&c.sql_type))
        })
        .cloned()
        .collect()
}
