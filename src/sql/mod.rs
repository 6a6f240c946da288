//! SQL generation module.
//!
//! This module provides the statement builders that render converted tables as
//! multi-dialect SQL text. It includes:
//!
//! - [`ddl`] - CREATE TABLE, DROP TABLE, CREATE INDEX
//! - [`dml`] - INSERT (single and multi-row)
//! - [`literal`] - dialect-neutral literal payloads
//! - [`ident`] - identifier length limiting and slugs
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect profiles

pub mod ddl;
pub mod dialect;
pub mod dml;
pub mod ident;
pub mod literal;
pub mod token;


// Re-export commonly used types at the sql module level
pub use dialect::{Dialect, DialectProfile, UnknownDialect};
pub use ident::{limit_identifier, sanitize_identifier, slug};
pub use literal::Literal;
pub use token::{Token, TokenStream};

// Re-export DDL types
pub use ddl::{ColumnDef, CreateIndex, CreateTable, DropTable, TableConstraint};

// Re-export DML types
pub use dml::Insert;
