//! MySQL SQL dialect.
//!
//! MySQL differences from ANSI:
//! - Backtick identifier quoting (`` `name` ``)
//! - Backslash is an escape character inside string literals
//! - BOOLEAN is an alias for TINYINT(1); TRUE/FALSE are accepted keywords
//! - 64-character identifier limit
//! - TEXT/BLOB columns need a prefix length to be indexed
//! - No CREATE INDEX IF NOT EXISTS
//! - DDL causes an implicit commit, so the script is never wrapped in a transaction

use super::helpers;
use super::DialectProfile;

/// MySQL SQL dialect.
pub(super) const PROFILE: DialectProfile = DialectProfile {
    name: "mysql",
    identifier_quote_char: '`',
    bool_literals: helpers::BOOL_KEYWORDS,
    backslash_escapes: true,
    max_identifier_length: 64,
    text_blob_types: &[
        "TEXT",
        "TINYTEXT",
        "MEDIUMTEXT",
        "LONGTEXT",
        "BLOB",
        "TINYBLOB",
        "MEDIUMBLOB",
        "LONGBLOB",
    ],
    supports_transaction_wrap: false,
    supports_index_if_not_exists: false,
};
