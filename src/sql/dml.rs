//! DML (Data Manipulation Language) support.
//!
//! This module provides the INSERT builder used for data rows, including
//! multi-row `VALUES` lists for batched output.
//!
//! # Examples
//!
//! ```ignore
//! use ods2sql::sql::dml::Insert;
//! use ods2sql::sql::{Dialect, Literal};
//!
//! let insert = Insert::into("users")
//!     .columns(["id", "name"])
//!     .values([Literal::Number("1".into()), Literal::string("Alice")])
//!     .values([Literal::Number("2".into()), Literal::string("Bob")]);
//!
//! println!("{}", insert.to_sql(Dialect::Sqlite));
//! ```

use super::dialect::Dialect;
use super::literal::Literal;
use super::token::{Token, TokenStream};

// ============================================================================
// INSERT
// ============================================================================

/// INSERT statement.
#[derive(Debug, Clone)]
#[must_use = "DML statements have no effect until converted to SQL with to_sql()"]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Literal>>,
}

impl Insert {
    /// Create a new INSERT statement.
    pub fn into(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Set the columns to insert.
    pub fn columns(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = cols.into_iter().map(|c| c.into()).collect();
        self
    }

    /// Add a row of values.
    pub fn values(mut self, vals: impl IntoIterator<Item = Literal>) -> Self {
        self.values.push(vals.into_iter().collect());
        self
    }

    /// Add multiple rows of values.
    pub fn values_many(mut self, rows: impl IntoIterator<Item = Vec<Literal>>) -> Self {
        self.values.extend(rows);
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        // INSERT INTO
        ts.push(Token::Insert).space().push(Token::Into).space();
        ts.push(Token::TableName(self.table.clone()));

        // Columns
        if !self.columns.is_empty() {
            ts.space().ident_list(&self.columns);
        }

        // VALUES
        if !self.values.is_empty() {
            ts.space().push(Token::Values);
            for (row_idx, row) in self.values.iter().enumerate() {
                if row_idx > 0 {
                    ts.comma();
                }
                ts.space().lparen();
                for (i, val) in row.iter().enumerate() {
                    if i > 0 {
                        ts.comma().space();
                    }
                    ts.push(val.to_token());
                }
                ts.rparen();
            }
        }

        ts
    }
}

// ============================================================================
// Tests
// ============================================================================
