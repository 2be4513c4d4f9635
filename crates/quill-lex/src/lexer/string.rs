//! String literal lexing.
//!
//! Strings are delimited by `'` or `"` and must close with the quote that
//! opened them, on the same line. Content is taken verbatim: there are no
//! escape sequences.

use crate::chars::is_newline;
use crate::error::Result;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// # Returns
    ///
    /// `Ok` after appending a `String` token holding the unquoted content,
    /// or `MalformedString` if a newline or the end of input arrives before
    /// the closing quote.
    pub(crate) fn read_string(&mut self) -> Result<()> {
        let quote = self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.malformed_string());
            }

            let c = self.cursor.current();
            if c == quote {
                let content = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance();
                self.push_token(TokenKind::String, TokenValue::Text(content));
                return Ok(());
            }

            if is_newline(c) {
                return Err(self.malformed_string());
            }

            self.cursor.advance();
        }
    }
}
