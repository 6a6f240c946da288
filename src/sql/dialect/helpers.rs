//! Shared helper functions for SQL dialect profiles.
//!
//! Reusable building blocks the profiles compose instead of duplicating logic.

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with the given quote character, doubling embedded ones.
/// Used by: SQLite and Postgres (`"`), MySQL (`` ` ``)
pub fn quote_with(quote: char, ident: &str) -> String {
    let doubled: String = [quote, quote].iter().collect();
    format!(
        "{q}{body}{q}",
        q = quote,
        body = ident.replace(quote, &doubled)
    )
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
/// Used by: SQLite, Postgres
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Quote string with single quotes, also doubling backslashes.
/// Used by: MySQL (default `sql_mode` reads `\` as an escape)
pub fn quote_string_backslash(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
}

// =============================================================================
// Boolean Formatting
// =============================================================================

/// Boolean keywords `TRUE`/`FALSE`.
/// Used by: Postgres, MySQL
pub const BOOL_KEYWORDS: (&str, &str) = ("TRUE", "FALSE");

/// Boolean as numeric `1`/`0`.
/// Used by: SQLite
pub const BOOL_NUMERIC: (&str, &str) = ("1", "0");

// =============================================================================
// Type Names
// =============================================================================

/// Normalize a declared SQL type to its upper-case base name.
///
/// Parameters and surrounding whitespace are dropped: `varchar(255)` → `VARCHAR`,
/// ` long text ` → `LONG TEXT`.
pub fn base_type_name(declared: &str) -> String {
    let upper = declared.trim().to_uppercase();
    let base = match upper.find('(') {
        Some(pos) => &upper[..pos],
        None => upper.as_str(),
    };
    base.split_whitespace().collect::<Vec<_>>().join(" ")
}
