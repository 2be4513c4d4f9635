//! Comment lexing.
//!
//! This module handles skipping `//` line comments and `/* */` block
//! comments. Comments never produce tokens.

use crate::chars::is_newline;
use crate::error::Result;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a comment. The cursor must be on a `/` followed by `/` or `*`.
    pub(crate) fn read_comment(&mut self) -> Result<()> {
        self.cursor.advance();
        if self.cursor.current() == '*' {
            self.skip_block_comment()
        } else {
            self.skip_line_comment();
            Ok(())
        }
    }

    /// Skips to, but not past, the next newline.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && !is_newline(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    /// Skips through the first `*/`, searching from the `*` of the opening
    /// `/*`. That star may close the comment, so `/*/` is a whole comment.
    ///
    /// Block comments do not nest. Reaching the end of input is an
    /// `UnterminatedComment` error unless the configuration allows it.
    fn skip_block_comment(&mut self) -> Result<()> {
        while !self.cursor.is_at_end() {
            if self.cursor.current() == '*' && self.cursor.peek(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }

        if self.config.allow_unterminated_block_comment {
            Ok(())
        } else {
            Err(self.unterminated_comment())
        }
    }
}
