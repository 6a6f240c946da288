//! Canonical literal payloads produced by value coercion.
//!
//! A [`Literal`] carries no dialect knowledge: booleans stay booleans and
//! strings stay unescaped until [`Literal::to_token`] is serialized for a dialect.

use std::fmt;

use serde::Serialize;

use super::token::Token;

/// A SQL literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Literal {
    Null,
    Bool(bool),
    /// Number in fixed (non-scientific) decimal notation.
    Number(String),
    String(String),
}

impl Literal {
    /// Build a string literal, normalizing the empty string to NULL.
    ///
    /// Blank cells and empty-string cells are indistinguishable in the source
    /// document, so both become NULL.
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Literal::Null
        } else {
            Literal::String(s)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// Convert to the token that renders this literal.
    pub fn to_token(&self) -> Token {
        match self {
            Literal::Null => Token::LitNull,
            Literal::Bool(b) => Token::LitBool(*b),
            Literal::Number(n) => Token::LitNumber(n.clone()),
            Literal::String(s) => Token::LitString(s.clone()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("NULL"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Number(n) => f.write_str(n),
            Literal::String(s) => write!(f, "{s:?}"),
        }
    }
}
