//! DDL (Data Definition Language) support.
//!
//! This module provides types and builders for generating the DDL statements
//! the converter needs (CREATE TABLE, DROP TABLE, CREATE INDEX) across dialects.
//!
//! # Examples
//!
//! ```ignore
//! use ods2sql::sql::ddl::{CreateTable, ColumnDef, TableConstraint};
//! use ods2sql::sql::Dialect;
//!
//! let table = CreateTable::new("users")
//!     .column(ColumnDef::new("id", "INTEGER"))
//!     .column(ColumnDef::new("name", "TEXT"))
//!     .constraint(TableConstraint::primary_key(["id"]));
//!
//! println!("{}", table.to_sql(Dialect::Postgres));
//! ```

use super::dialect::Dialect;
use super::token::{Token, TokenStream};

// ============================================================================
// CREATE TABLE
// ============================================================================

/// CREATE TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateTable {
    pub if_not_exists: bool,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

impl CreateTable {
    /// Create a new CREATE TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            if_not_exists: false,
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add IF NOT EXISTS clause.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Add a column definition.
    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    /// Add multiple column definitions.
    pub fn columns(mut self, cols: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(cols);
        self
    }

    /// Add a table constraint.
    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, _dialect: Dialect) -> TokenStream {
        let mut ts = TokenStream::new();

        // CREATE TABLE
        ts.push(Token::Create).space().push(Token::Table);

        // IF NOT EXISTS is accepted by all supported dialects for tables
        if self.if_not_exists {
            ts.space().if_not_exists();
        }

        ts.space().push(Token::TableName(self.name.clone()));

        // Column definitions and constraints
        ts.space().lparen();

        let mut first = true;
        for col in &self.columns {
            if !first {
                ts.comma().space();
            }
            first = false;
            ts.append(&col.to_tokens());
        }

        for constraint in &self.constraints {
            if !first {
                ts.comma().space();
            }
            first = false;
            ts.append(&constraint.to_tokens());
        }

        ts.rparen();
        ts
    }
}

// ============================================================================
// Column Definition
// ============================================================================

/// Column definition for CREATE TABLE.
///
/// The data type is the declared type text from the document, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
}

impl ColumnDef {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Ident(self.name.clone()));
        if !self.data_type.is_empty() {
            ts.space().push(Token::Raw(self.data_type.clone()));
        }
        ts
    }
}

// ============================================================================
// Table Constraints
// ============================================================================

/// Table-level constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    PrimaryKey { columns: Vec<String> },
}

impl TableConstraint {
    /// Create a PRIMARY KEY constraint.
    pub fn primary_key(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        TableConstraint::PrimaryKey {
            columns: columns.into_iter().map(|c| c.into()).collect(),
        }
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        match self {
            TableConstraint::PrimaryKey { columns } => {
                ts.push(Token::Primary)
                    .space()
                    .push(Token::Key)
                    .space()
                    .ident_list(columns);
            }
        }
        ts
    }
}

// ============================================================================
// DROP TABLE
// ============================================================================

/// DROP TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct DropTable {
    pub if_exists: bool,
    pub name: String,
}

impl DropTable {
    /// Create a new DROP TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            if_exists: false,
            name: name.into(),
        }
    }

    /// Add IF EXISTS clause.
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens().serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Drop).space().push(Token::Table);

        if self.if_exists {
            ts.space().push(Token::If).space().push(Token::Exists);
        }

        ts.space().push(Token::TableName(self.name.clone()));
        ts
    }
}

// ============================================================================
// CREATE INDEX
// ============================================================================

/// CREATE INDEX statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateIndex {
    pub if_not_exists: bool,
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
}

impl CreateIndex {
    /// Create a new CREATE INDEX statement.
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            if_not_exists: false,
            name: name.into(),
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Add IF NOT EXISTS clause (dropped for dialects that reject it).
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Add a column to the index.
    pub fn column(mut self, col: impl Into<String>) -> Self {
        self.columns.push(col.into());
        self
    }

    /// Add multiple columns to the index.
    pub fn columns(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns.extend(cols.into_iter().map(|c| c.into()));
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, dialect: Dialect) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create).space().push(Token::Index);

        if self.if_not_exists && dialect.profile().supports_index_if_not_exists {
            ts.space().if_not_exists();
        }

        ts.space().push(Token::Ident(self.name.clone()));
        ts.space().push(Token::On).space();
        ts.push(Token::TableName(self.table.clone()));

        ts.space().ident_list(&self.columns);
        ts
    }
}

// ============================================================================
// Tests
// ============================================================================
