//! SQLite SQL dialect.
//!
//! SQLite features:
//! - ANSI identifier quoting (`"`)
//! - No native boolean type; booleans are stored as 1/0
//! - No practical identifier length limit (capped at 64 for portability)
//! - IF NOT EXISTS for both tables and indexes
//! - Transactional DDL (BEGIN/COMMIT around the whole script)

use super::helpers;
use super::DialectProfile;

/// SQLite SQL dialect.
pub(super) const PROFILE: DialectProfile = DialectProfile {
    name: "sqlite",
    identifier_quote_char: '"',
    bool_literals: helpers::BOOL_NUMERIC,
    backslash_escapes: false,
    max_identifier_length: 64,
    text_blob_types: &[],
    supports_transaction_wrap: true,
    supports_index_if_not_exists: true,
};
