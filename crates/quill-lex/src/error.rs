//! Lexer error types.
//!
//! Lexing is fail-fast: the first malformed construct aborts the run and is
//! reported as a single [`LexError`].
//!
//! # Example
//!
//! ```
//! use quill_lex::{tokenize, LexError};
//!
//! match tokenize("let s = \"abc") {
//!     Err(LexError::MalformedString { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use quill_util::diagnostic::{line_at, Diagnostic, SourceSnippet};
use quill_util::Span;
use thiserror::Error;

/// Result alias used throughout the lexer.
pub type Result<T> = std::result::Result<T, LexError>;

/// Errors that abort a lexing run.
///
/// Lines and columns are 1-based and point at the first character of the
/// construct that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// String literal not closed before a newline or the end of input.
    #[error("Malformed string at line {line}, column {column}")]
    MalformedString {
        /// Line of the first character (1-based).
        line: u32,
        /// Column of the first character (1-based).
        column: u32,
    },

    /// Numeric literal whose text does not parse, including `0x` with no
    /// digits.
    #[error("Malformed number at line {line}, column {column}")]
    MalformedNumber {
        /// Line of the first character (1-based).
        line: u32,
        /// Column of the first character (1-based).
        column: u32,
    },

    /// Character that does not begin any token.
    #[error("Unrecognized character '{ch}' at line {line}, column {column}")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// Line of the first character (1-based).
        line: u32,
        /// Column of the first character (1-based).
        column: u32,
    },

    /// Block comment still open at the end of input.
    #[error("Unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment {
        /// Line of the first character (1-based).
        line: u32,
        /// Column of the first character (1-based).
        column: u32,
    },

    /// Input rejected by the configured size limit before scanning.
    #[error("Source is {len} bytes, exceeding the configured limit of {max} bytes")]
    SourceTooLarge {
        /// Source length in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },
}

impl LexError {
    /// The 1-based line of the failure. Size-limit errors report line 1.
    pub fn line(&self) -> u32 {
        match self {
            LexError::MalformedString { line, .. }
            | LexError::MalformedNumber { line, .. }
            | LexError::UnrecognizedCharacter { line, .. }
            | LexError::UnterminatedComment { line, .. } => *line,
            LexError::SourceTooLarge { .. } => 1,
        }
    }

    /// The 1-based column of the failure. Size-limit errors report column 1.
    pub fn column(&self) -> u32 {
        match self {
            LexError::MalformedString { column, .. }
            | LexError::MalformedNumber { column, .. }
            | LexError::UnrecognizedCharacter { column, .. }
            | LexError::UnterminatedComment { column, .. } => *column,
            LexError::SourceTooLarge { .. } => 1,
        }
    }

    /// Builds a diagnostic pointing at the failure inside `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_lex::tokenize;
    ///
    /// let source = "let x = @";
    /// let err = tokenize(source).unwrap_err();
    /// let report = err.to_diagnostic(source).render();
    /// assert!(report.contains("let x = @"));
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = Span::point(self.line(), self.column());
        let mut diag = Diagnostic::error(self.summary(), span);

        if let Some(text) = line_at(source, self.line()) {
            diag = diag.with_snippet(
                SourceSnippet::point(text, self.line() as usize, self.column() as usize)
                    .with_label(self.label()),
            );
        }

        match self {
            LexError::MalformedString { .. } => {
                diag.with_note("strings must close with the same quote on the same line")
            },
            LexError::MalformedNumber { .. } => {
                diag.with_note("numbers allow a single decimal point and exponent; `0x` needs hex digits")
            },
            _ => diag,
        }
    }

    fn summary(&self) -> String {
        match self {
            LexError::MalformedString { .. } => "malformed string".to_string(),
            LexError::MalformedNumber { .. } => "malformed number".to_string(),
            LexError::UnrecognizedCharacter { ch, .. } => {
                format!("unrecognized character '{}'", ch.escape_default())
            },
            LexError::UnterminatedComment { .. } => "unterminated block comment".to_string(),
            LexError::SourceTooLarge { .. } => self.to_string(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::MalformedString { .. } => "string starts here",
            LexError::MalformedNumber { .. } => "number starts here",
            LexError::UnrecognizedCharacter { .. } => "not valid here",
            LexError::UnterminatedComment { .. } => "comment starts here",
            LexError::SourceTooLarge { .. } => "input starts here",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_line() {
        let err = LexError::MalformedNumber { line: 3, column: 7 };
        assert_eq!(err.to_string(), "Malformed number at line 3, column 7");

        let err = LexError::UnrecognizedCharacter {
            ch: '@',
            line: 1,
            column: 1,
        };
        assert_eq!(err.to_string(), "Unrecognized character '@' at line 1, column 1");
    }

    #[test]
    fn test_line_and_column_accessors() {
        let err = LexError::UnterminatedComment { line: 4, column: 2 };
        assert_eq!((err.line(), err.column()), (4, 2));

        let err = LexError::SourceTooLarge { len: 10, max: 5 };
        assert_eq!((err.line(), err.column()), (1, 1));
    }

    #[test]
    fn test_diagnostic_snippet() {
        let source = "let a = 1\nlet b = 'oops";
        let err = LexError::MalformedString { line: 2, column: 9 };
        let diag = err.to_diagnostic(source);

        assert_eq!(diag.message, "malformed string");
        assert_eq!(diag.snippets.len(), 1);
        assert_eq!(diag.snippets[0].line, "let b = 'oops");
        assert_eq!(diag.snippets[0].start_column, 9);
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_diagnostic_escapes_control_chars() {
        let err = LexError::UnrecognizedCharacter {
            ch: '\t',
            line: 1,
            column: 1,
        };
        assert_eq!(err.to_diagnostic("\t").message, "unrecognized character '\\t'");
    }
}
