//! SQL dialect profiles.
//!
//! A dialect is plain data: a [`DialectProfile`] record of quoting rules, literal
//! spellings and engine limits, selected through the [`Dialect`] enum.
//!
//! - Identifier quoting: `"` (SQLite/PostgreSQL), `` ` `` (MySQL)
//! - Boolean literals: `1`/`0` (SQLite) vs `TRUE`/`FALSE`
//! - String literals: MySQL treats `\` as an escape character, the others do not
//! - Identifier length caps: 64 (SQLite, for portability), 63 (PostgreSQL), 64 (MySQL)
//! - MySQL cannot index TEXT/BLOB columns without a prefix length
//! - MySQL DDL commits implicitly, so output is never wrapped in a transaction there
//!
//! # Usage
//!
//! ```ignore
//! use ods2sql::sql::dialect::Dialect;
//!
//! let profile = Dialect::Postgres.profile();
//! assert_eq!(profile.quote_identifier("user"), "\"user\"");
//! ```
//!
//! | Feature | SQLite | PostgreSQL | MySQL |
//! |---------|--------|------------|-------|
//! | CREATE TABLE IF NOT EXISTS | ✓ | ✓ | ✓ |
//! | CREATE INDEX IF NOT EXISTS | ✓ | ✓ | ❌ |
//! | Index on TEXT/BLOB without prefix | ✓ | ✓ | ❌ |
//! | BEGIN/COMMIT wrapping | ✓ | ✓ | ❌ (skipped) |

pub mod helpers;
mod mysql;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy values for one target engine.
///
/// Immutable; one instance per emission run, obtained from [`Dialect::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectProfile {
    /// Dialect name for display/logging.
    pub name: &'static str,
    /// Character wrapped around identifiers (doubled when it appears inside one).
    pub identifier_quote_char: char,
    /// Spellings for `(true, false)`.
    pub bool_literals: (&'static str, &'static str),
    /// Whether `\` inside a string literal starts an escape sequence.
    pub backslash_escapes: bool,
    /// Longest identifier the engine accepts, counted in characters.
    pub max_identifier_length: usize,
    /// Declared base types that cannot be indexed without a prefix length.
    pub text_blob_types: &'static [&'static str],
    /// Whether the whole script may be wrapped in `BEGIN;` / `COMMIT;`.
    pub supports_transaction_wrap: bool,
    /// Whether `CREATE INDEX IF NOT EXISTS` is accepted.
    pub supports_index_if_not_exists: bool,
}

impl DialectProfile {
    /// Quote a single identifier (column, index or unqualified table name).
    ///
    /// Dots are part of the name; see [`quote_table_name`](Self::quote_table_name)
    /// for qualified names.
    pub fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_with(self.identifier_quote_char, ident)
    }

    /// Quote a table name.
    ///
    /// Dotted names (`schema.table`) are split and each part quoted separately.
    pub fn quote_table_name(&self, name: &str) -> String {
        let parts: Vec<&str> = name.split('.').filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return self.quote_identifier(name);
        }
        parts
            .into_iter()
            .map(|part| self.quote_identifier(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quote a string literal.
    ///
    /// Single quotes are doubled everywhere; backslashes are doubled as well
    /// where the engine reads them as escapes.
    pub fn quote_string(&self, s: &str) -> String {
        if self.backslash_escapes {
            helpers::quote_string_backslash(s)
        } else {
            helpers::quote_string_single(s)
        }
    }

    /// Format a boolean literal.
    pub fn boolean_literal(&self, b: bool) -> &'static str {
        if b {
            self.bool_literals.0
        } else {
            self.bool_literals.1
        }
    }

    /// Format a NULL literal.
    pub fn null_literal(&self) -> &'static str {
        "NULL"
    }

    /// Whether a declared column type falls in the non-indexable TEXT/BLOB family.
    pub fn is_text_blob(&self, declared_type: &str) -> bool {
        let base = helpers::base_type_name(declared_type);
        self.text_blob_types.iter().any(|t| *t == base)
    }
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Sqlite,
    #[serde(alias = "postgresql")]
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    /// Get the dialect profile.
    pub fn profile(&self) -> &'static DialectProfile {
        match self {
            Dialect::Sqlite => &sqlite::PROFILE,
            Dialect::Postgres => &postgres::PROFILE,
            Dialect::MySql => &mysql::PROFILE,
        }
    }

    /// Dialect name for display/logging.
    pub fn name(&self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported dialect: {0} (expected sqlite, postgres, postgresql or mysql)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            other => Err(UnknownDialect(other.to_string())),
        }
    }
}
