//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// Character returned by [`Cursor::current`] and [`Cursor::peek`] once the
/// end of the source has been reached.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// The cursor maintains the current position in the source string and
/// provides methods for advancing and peeking ahead. Line numbers advance
/// exactly when a newline is consumed.
///
/// # Example
///
/// ```
/// use quill_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42");
///
/// assert_eq!(cursor.current(), 'l');
/// assert_eq!(cursor.advance(), 'l');
/// assert_eq!(cursor.current(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns [`EOF_CHAR`] if at the end of the source.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Returns the character `offset` characters ahead of the current one
    /// without moving.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(0), 'a');
    /// assert_eq!(cursor.peek(2), 'c');
    /// assert_eq!(cursor.peek(3), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Moves past the current character and returns it.
    ///
    /// Consuming a `'\n'` increments the line and resets the column to 1.
    /// At the end of the source this is a no-op returning [`EOF_CHAR`].
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42");
        assert_eq!(cursor.current(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_returns_char_left_behind() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), 'a');
        assert_eq!(cursor.advance(), 'b');
        assert_eq!(cursor.advance(), 'c');
        assert_eq!(cursor.current(), EOF_CHAR);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert_eq!(cursor.advance(), EOF_CHAR);
        assert_eq!((cursor.position(), cursor.line(), cursor.column()), (1, 1, 2));
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.advance(), 'α');
        assert_eq!(cursor.current(), 'β');
        assert_eq!(cursor.position(), 'α'.len_utf8());
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(1), 'b');
        assert_eq!(cursor.peek(100), EOF_CHAR);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_mixed_utf8() {
        let cursor = Cursor::new("aé=");
        assert_eq!(cursor.peek(1), 'é');
        assert_eq!(cursor.peek(2), '=');
        assert_eq!(cursor.peek(3), EOF_CHAR);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n\ne");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));

        // Sitting on the newline does not change the line
        assert_eq!(cursor.current(), '\n');
        assert_eq!(cursor.line(), 1);

        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));

        cursor.advance();
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (4, 1));
        assert_eq!(cursor.current(), 'e');
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("let x");
        let start = cursor.position();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(start), "le");
        assert_eq!(cursor.remaining(), "t x");
        assert_eq!(cursor.source(), "let x");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), EOF_CHAR);
        assert_eq!(cursor.advance(), EOF_CHAR);
        assert_eq!(cursor.line(), 1);
    }
}
