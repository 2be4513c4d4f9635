//! Identifier and keyword lexing.
//!
//! This module handles identifiers, reserved keywords and the literal words
//! `true`, `false` and `null`.

use crate::chars::is_ident_continue;
use crate::tables::is_keyword;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

/// Classifies a complete identifier-shaped word.
///
/// Reserved keywords take priority, then the literal words, then plain
/// identifiers.
pub(crate) fn classify_word(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else {
        match word {
            "true" | "false" => TokenKind::Bool,
            "null" => TokenKind::Null,
            _ => TokenKind::Identifier,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, boolean or null.
    ///
    /// The current character must be a letter or underscore. Consumes the
    /// maximal run of letters, digits and underscores and appends exactly
    /// one token.
    pub(crate) fn read_identifier(&mut self) {
        self.cursor.advance();
        while !self.cursor.is_at_end() && is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }

        let word = self.cursor.slice_from(self.token_start);
        let kind = classify_word(word);
        self.push_token(kind, TokenValue::Text(word.to_string()));
    }
}
