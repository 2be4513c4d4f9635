//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with its [`TokenValue`] and the
//! [`Span`] of the lexeme it was read from.

use std::fmt;

use quill_util::Span;

/// The classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word: `const`, `let`
    Keyword,
    /// Any other name
    Identifier,
    /// `true` or `false`
    Bool,
    /// `null`
    Null,
    /// Numeric literal
    Number,
    /// Quoted string literal
    String,
    /// `(` or `)`
    Paren,
    /// `{` or `}`
    Brace,
    /// `[` or `]`
    Bracket,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `+ - * / ^ %`
    Arithmetic,
    /// `> >= < <= == !=`
    Comparison,
    /// `=`
    Assignment,
}

impl TokenKind {
    /// The kind's name as it appears in token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Bool => "Bool",
            TokenKind::Null => "Null",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Paren => "Paren",
            TokenKind::Brace => "Brace",
            TokenKind::Bracket => "Bracket",
            TokenKind::Dot => "Dot",
            TokenKind::Colon => "Colon",
            TokenKind::Arithmetic => "Arithmetic",
            TokenKind::Comparison => "Comparison",
            TokenKind::Assignment => "Assignment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Literal text: the lexeme itself, or the unquoted content of a string.
    Text(String),
    /// A parsed numeric literal. Never NaN.
    Number(f64),
}

impl TokenValue {
    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Number(_) => None,
        }
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            TokenValue::Text(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

/// A classified lexical unit.
///
/// # Example
///
/// ```
/// use quill_lex::{tokenize, TokenKind, TokenValue};
///
/// let tokens = tokenize("x = 0xFF").unwrap();
/// assert_eq!(tokens[2].kind(), TokenKind::Number);
/// assert_eq!(tokens[2].value(), &TokenValue::Number(255.0));
/// assert_eq!(tokens[2].span().column, 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, value: impl Into<TokenValue>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// The token's classification.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's payload.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Where the token's lexeme sits in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if kind and value match, ignoring the span.
    pub fn is(&self, kind: TokenKind, value: impl Into<TokenValue>) -> bool {
        self.kind == kind && self.value == value.into()
    }
}

/// Renders the token as source text that lexes back to the same kind and
/// value.
///
/// Strings are wrapped in double quotes, or single quotes when the content
/// contains a double quote. Infinity, which has no literal form, renders
/// as an exponent that overflows back to it.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::String, TokenValue::Text(text)) => {
                let quote = if text.contains('"') { '\'' } else { '"' };
                write!(f, "{quote}{text}{quote}")
            },
            (_, TokenValue::Text(text)) => f.write_str(text),
            (_, TokenValue::Number(n)) if n.is_infinite() => f.write_str("1e999"),
            (_, TokenValue::Number(n)) => write!(f, "{n}"),
        }
    }
}
