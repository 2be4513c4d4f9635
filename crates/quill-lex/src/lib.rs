//! quill-lex - Lexical Analyzer for the quill scripting language
//!
//! This crate transforms source text into an ordered vector of classified
//! tokens for the parser. Lexing is a single fail-fast pass: it returns
//! every token, or the first error with the line it occurred on.
//!
//! # Example Usage
//!
//! ```
//! use quill_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("const x = 5").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert!(tokens[0].is(TokenKind::Keyword, "const"));
//! assert!(tokens[3].is(TokenKind::Number, 5.0));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification predicates
//! - [`tables`] - Keyword, punctuation and operator tables
//! - [`error`] - Error type
//! - [`config`] - Lexer configuration
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `const`, `let`
//!
//! ## Literals
//!
//! - **Bool**: `true`, `false`
//! - **Null**: `null`
//! - **Number**: `42`, `3.5`, `1e10`, `2.5e-3`, `1_000`, `0xFF`
//! - **String**: `"hello"`, `'world'` (no escape sequences)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `^`, `%`
//! - **Comparison**: `>`, `>=`, `<`, `<=`, `==`, `!=`
//! - **Assignment**: `=`
//!
//! ## Punctuation
//!
//! `(` `)` Paren, `{` `}` Brace, `[` `]` Bracket, `.` Dot, `:` Colon
//!
//! ## Skipped
//!
//! Spaces, carriage returns, newlines, `// line` and `/* block */` comments.

#![warn(missing_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenValue};

/// Tokenizes `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Tokenizes `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>> {
    Lexer::with_config(source, config.clone()).tokenize()
}
