//! PostgreSQL SQL dialect.
//!
//! PostgreSQL features:
//! - ANSI identifier quoting (`"`)
//! - Native boolean type (TRUE/FALSE)
//! - Identifiers truncated by the server at NAMEDATALEN - 1 = 63 bytes
//! - IF NOT EXISTS for both tables and indexes
//! - Transactional DDL

use super::helpers;
use super::DialectProfile;

/// PostgreSQL SQL dialect.
pub(super) const PROFILE: DialectProfile = DialectProfile {
    name: "postgres",
    identifier_quote_char: '"',
    bool_literals: helpers::BOOL_KEYWORDS,
    backslash_escapes: false,
    max_identifier_length: 63,
    text_blob_types: &[],
    supports_transaction_wrap: true,
    supports_index_if_not_exists: true,
};
