//! Identifier sanitizing.
//!
//! Engines cap identifier length; generated names (index names in particular)
//! can exceed the cap when tables and columns have long names. Over-long
//! identifiers are truncated and suffixed with a short content hash so that two
//! names sharing a long prefix still map to distinct identifiers.

use std::sync::LazyLock;

use regex::Regex;
use sha1::{Digest, Sha1};

use super::dialect::DialectProfile;

/// Hex characters of the digest kept in the suffix.
const HASH_HEX_LEN: usize = 8;

/// `_` + hash characters.
const SUFFIX_LEN: usize = HASH_HEX_LEN + 1;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Limit `candidate` to `max_len` characters.
///
/// Fitting identifiers are returned unchanged. Longer ones keep their first
/// `max_len - 9` characters followed by `_` and the first 8 hex digits of the
/// SHA-1 of the whole original candidate. Limits too short to hold the suffix
/// get the first `max_len` hex digits alone. The result is never longer than
/// `max_len` and depends only on `(candidate, max_len)`.
pub fn limit_identifier(candidate: &str, max_len: usize) -> String {
    if candidate.chars().count() <= max_len {
        return candidate.to_string();
    }

    let digest = Sha1::digest(candidate.as_bytes());
    let hex = format!("{:x}", digest);
    if max_len < SUFFIX_LEN {
        return hex[..max_len].to_string();
    }
    let keep = max_len.saturating_sub(SUFFIX_LEN);
    let head: String = candidate.chars().take(keep).collect();

    format!("{}_{}", head, &hex[..HASH_HEX_LEN])
}

/// Limit `candidate` to the active dialect's identifier length.
pub fn sanitize_identifier(candidate: &str, profile: &DialectProfile) -> String {
    limit_identifier(candidate, profile.max_identifier_length)
}

/// Make a safe identifier fragment.
///
/// Lowercases, replaces runs of anything outside `[a-z0-9]` with `_`, trims
/// leading/trailing `_`, and falls back to `x` for an empty result.
pub fn slug(s: &str) -> String {
    let lower = s.to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lower, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "x".to_string()
    } else {
        trimmed.to_string()
    }
}
