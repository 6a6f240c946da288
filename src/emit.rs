//! SQL emission.
//!
//! Turns scanned [`TableBlock`]s into an ordered list of complete statements.
//! Per table, in order:
//!
//! 1. `DROP TABLE IF EXISTS` (unless disabled)
//! 2. `CREATE TABLE [IF NOT EXISTS]`, with a `PRIMARY KEY` clause when declared
//! 3. `CREATE INDEX` for every planned index
//! 4. batched `INSERT`s
//!
//! The whole script is optionally wrapped in `BEGIN;` / `COMMIT;` for dialects
//! that allow it. Literal rendering is left entirely to the dialect profile.

use serde::Serialize;
use tracing::debug;

use crate::config::ConvertOptions;
use crate::index::{plan_indexes, resolve_primary_key};
use crate::scan::{scan_workbook, Column, TableBlock};
use crate::sheet::Workbook;
use crate::sql::{
    ColumnDef, CreateIndex, CreateTable, DropTable, Insert, TableConstraint, Token, TokenStream,
};
use crate::warning::{Warning, WarningKind};

// ============================================================================
// Results
// ============================================================================

/// What a table looked like after scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub sheet: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: usize,
}

impl From<&TableBlock> for TableSummary {
    fn from(block: &TableBlock) -> Self {
        Self {
            sheet: block.sheet.clone(),
            name: block.name.clone(),
            columns: block.columns.clone(),
            rows: block.rows.len(),
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    /// Complete statements, each terminated by `;`.
    pub statements: Vec<String>,
    pub warnings: Vec<Warning>,
    /// Tables that survived filtering, in document order.
    pub tables: Vec<TableSummary>,
}

impl Conversion {
    /// The statements as a script, one per line.
    pub fn to_script(&self) -> String {
        let mut out = String::new();
        for stmt in &self.statements {
            out.push_str(stmt);
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Scan a workbook and emit SQL for it.
pub fn convert_workbook(
    workbook: &Workbook,
    options: &ConvertOptions,
) -> crate::Result<Conversion> {
    let mut warnings = Vec::new();
    let blocks = scan_workbook(workbook, &mut warnings)?;
    Ok(convert_blocks(blocks, options, warnings))
}

/// Emit SQL for already-scanned blocks.
///
/// `warnings` carries diagnostics collected so far; emission appends to it.
pub fn convert_blocks(
    blocks: Vec<TableBlock>,
    options: &ConvertOptions,
    mut warnings: Vec<Warning>,
) -> Conversion {
    let blocks = select_tables(blocks, options, &mut warnings);
    if blocks.is_empty() {
        return Conversion {
            warnings,
            ..Conversion::default()
        };
    }

    let dialect = options.dialect;
    let wrap = options.wrap_transaction && dialect.profile().supports_transaction_wrap;
    if options.wrap_transaction && !wrap {
        warnings.push(Warning::new(
            WarningKind::IgnoredOption,
            format!("Transaction wrapping is not supported for {dialect}; ignored."),
        ));
    }

    let mut statements = Vec::new();
    if wrap {
        statements.push(keyword_statement(Token::Begin, options));
    }
    for block in &blocks {
        statements.extend(emit_table(block, options, &mut warnings));
    }
    if wrap {
        statements.push(keyword_statement(Token::Commit, options));
    }

    debug!(
        dialect = %dialect,
        tables = blocks.len(),
        statements = statements.len(),
        "emitted script"
    );

    Conversion {
        statements,
        warnings,
        tables: blocks.iter().map(TableSummary::from).collect(),
    }
}

/// Scan a workbook and summarize its tables without emitting SQL.
pub fn summarize_workbook(
    workbook: &Workbook,
    options: &ConvertOptions,
) -> crate::Result<Conversion> {
    let mut warnings = Vec::new();
    let blocks = scan_workbook(workbook, &mut warnings)?;
    let blocks = select_tables(blocks, options, &mut warnings);
    Ok(Conversion {
        statements: Vec::new(),
        warnings,
        tables: blocks.iter().map(TableSummary::from).collect(),
    })
}

/// Apply the table filter, reporting when nothing is left.
fn select_tables(
    blocks: Vec<TableBlock>,
    options: &ConvertOptions,
    warnings: &mut Vec<Warning>,
) -> Vec<TableBlock> {
    if blocks.is_empty() {
        warnings.push(Warning::new(
            WarningKind::EmptyResult,
            "No instrumented tables found.",
        ));
        return blocks;
    }
    let blocks = filter_tables(blocks, options);
    if blocks.is_empty() {
        warnings.push(Warning::new(
            WarningKind::EmptyResult,
            "After filtering, no tables remained.",
        ));
    }
    blocks
}

/// Keep only the tables named in the filter (exact match); an empty filter
/// keeps everything.
pub fn filter_tables(blocks: Vec<TableBlock>, options: &ConvertOptions) -> Vec<TableBlock> {
    if options.table_filter.is_empty() {
        return blocks;
    }
    blocks
        .into_iter()
        .filter(|b| options.table_filter.contains(&b.name))
        .collect()
}

/// All statements for one table.
pub fn emit_table(
    block: &TableBlock,
    options: &ConvertOptions,
    warnings: &mut Vec<Warning>,
) -> Vec<String> {
    let dialect = options.dialect;
    let profile = dialect.profile();
    let mut statements = Vec::new();

    if options.mode.emits_schema() {
        let primary_key = resolve_primary_key(block, &options.primary_key, warnings);

        if options.emit_drop {
            let drop = DropTable::new(&block.name).if_exists();
            statements.push(terminate(drop.to_sql(dialect)));
        }

        let mut create = CreateTable::new(&block.name).columns(
            block
                .columns
                .iter()
                .map(|c| ColumnDef::new(&c.name, &c.sql_type)),
        );
        if options.if_not_exists {
            create = create.if_not_exists();
        }
        if !primary_key.is_empty() {
            create = create.constraint(TableConstraint::primary_key(primary_key.iter()));
        }
        statements.push(terminate(create.to_sql(dialect)));

        for index in plan_indexes(block, &primary_key, options, profile, warnings) {
            let mut stmt = CreateIndex::new(index.name, &block.name).columns(index.columns);
            if options.if_not_exists {
                stmt = stmt.if_not_exists();
            }
            statements.push(terminate(stmt.to_sql(dialect)));
        }
    }

    if options.mode.emits_data() && !block.rows.is_empty() {
        let columns: Vec<&str> = block.column_names().collect();
        for chunk in block.rows.chunks(options.rows_per_insert()) {
            let insert = Insert::into(&block.name)
                .columns(columns.iter().copied())
                .values_many(chunk.iter().cloned());
            statements.push(terminate(insert.to_sql(dialect)));
        }
    }

    debug!(table = %block.name, statements = statements.len(), "emitted table");
    statements
}

fn terminate(mut sql: String) -> String {
    sql.push(';');
    sql
}

fn keyword_statement(keyword: Token, options: &ConvertOptions) -> String {
    let mut ts = TokenStream::new();
    ts.push(keyword).semicolon();
    ts.serialize(options.dialect)
}
