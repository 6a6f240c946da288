//! SQL Tokens - the atomic units of SQL output.
//!
//! Tokens are dialect-agnostic representations that serialize
//! to dialect-specific strings.

use super::dialect::Dialect;

/// SQL Token - every element the emitter writes.
///
/// Adding a new variant here will cause compile errors everywhere
/// it needs to be handled (exhaustive matching).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === DDL Keywords ===
    Create,
    Drop,
    Table,
    Index,
    Primary,
    Key,
    If,
    Not,
    Exists,
    On,

    // === DML Keywords ===
    Insert,
    Into,
    Values,

    // === Transaction Keywords ===
    Begin,
    Commit,

    // === Punctuation ===
    Comma,
    LParen,
    RParen,
    Semicolon,

    // === Whitespace ===
    Space,

    // === Dynamic Content ===
    /// Table name; dotted names are quoted per part
    TableName(String),
    /// Column or index name, always quoted as one part
    Ident(String),
    /// Numeric literal already rendered in fixed notation
    LitNumber(String),
    /// String literal
    LitString(String),
    /// Boolean literal
    LitBool(bool),
    /// NULL literal
    LitNull,

    // === Escape Hatch ===
    /// Raw SQL passed directly to output without escaping.
    ///
    /// Used for declared column types, which are copied from the document as the
    /// author wrote them. Never use it for cell values: those go through
    /// `Token::LitString` and friends so they are escaped for the target dialect.
    Raw(String),
}

impl Token {
    /// Serialize this token to a string for the given dialect.
    pub fn serialize(&self, dialect: Dialect) -> String {
        let profile = dialect.profile();
        match self {
            // DDL keywords
            Token::Create => "CREATE".into(),
            Token::Drop => "DROP".into(),
            Token::Table => "TABLE".into(),
            Token::Index => "INDEX".into(),
            Token::Primary => "PRIMARY".into(),
            Token::Key => "KEY".into(),
            Token::If => "IF".into(),
            Token::Not => "NOT".into(),
            Token::Exists => "EXISTS".into(),
            Token::On => "ON".into(),

            // DML keywords
            Token::Insert => "INSERT".into(),
            Token::Into => "INTO".into(),
            Token::Values => "VALUES".into(),

            // Transaction keywords
            Token::Begin => "BEGIN".into(),
            Token::Commit => "COMMIT".into(),

            // Punctuation
            Token::Comma => ",".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Semicolon => ";".into(),

            // Whitespace
            Token::Space => " ".into(),

            // Dynamic - dialect-specific formatting
            Token::TableName(name) => profile.quote_table_name(name),
            Token::Ident(name) => profile.quote_identifier(name),
            Token::LitNumber(n) => n.clone(),
            Token::LitString(s) => profile.quote_string(s),
            Token::LitBool(b) => profile.boolean_literal(*b).into(),
            Token::LitNull => profile.null_literal().into(),

            // Escape hatch
            Token::Raw(s) => s.clone(),
        }
    }
}

/// A stream of tokens that can be serialized to SQL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    /// Push a single token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Append another token stream.
    pub fn append(&mut self, other: &TokenStream) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Serialize all tokens to a SQL string.
    pub fn serialize(&self, dialect: Dialect) -> String {
        self.tokens.iter().map(|t| t.serialize(dialect)).collect()
    }

    // Convenience methods for common tokens
    pub fn space(&mut self) -> &mut Self {
        self.push(Token::Space)
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
    pub fn lparen(&mut self) -> &mut Self {
        self.push(Token::LParen)
    }
    pub fn rparen(&mut self) -> &mut Self {
        self.push(Token::RParen)
    }
    pub fn semicolon(&mut self) -> &mut Self {
        self.push(Token::Semicolon)
    }

    /// Push `IF NOT EXISTS`.
    pub fn if_not_exists(&mut self) -> &mut Self {
        self.push(Token::If)
            .space()
            .push(Token::Not)
            .space()
            .push(Token::Exists)
    }

    /// Push a parenthesized, comma-separated list of identifiers.
    pub fn ident_list<'a>(&mut self, names: impl IntoIterator<Item = &'a String>) -> &mut Self {
        self.lparen();
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                self.comma().space();
            }
            self.push(Token::Ident(name.clone()));
        }
        self.rparen()
    }
}
