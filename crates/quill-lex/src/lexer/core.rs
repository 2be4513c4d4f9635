//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its dispatch loop and the
//! helpers shared by the sub-readers.

use log::{debug, trace};
use quill_util::Span;

use crate::chars::{is_digit, is_ident_start, is_newline, is_quote, is_whitespace};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::tables::{is_operator_start, punctuation_kind};
use crate::token::{Token, TokenKind, TokenValue};

/// Lexer for the quill scripting language.
///
/// A lexer owns one run over one source string. [`Lexer::tokenize`]
/// consumes it and returns either every token or the first error.
///
/// # Example
///
/// ```
/// use quill_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("let x = 42").tokenize().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Identifier, TokenKind::Assignment, TokenKind::Number]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Options for this run.
    pub(crate) config: LexerConfig,

    /// Tokens produced so far, in source order.
    tokens: Vec<Token>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            tokens: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Runs the lexer to the end of the source.
    ///
    /// # Returns
    /// Every token in source order, or the first error encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let len = self.cursor.source().len();
        debug!("lexing {} bytes", len);

        if let Some(max) = self.config.max_source_len {
            if len > max {
                let err = LexError::SourceTooLarge { len, max };
                debug!("lexing aborted: {}", err);
                return Err(err);
            }
        }

        match self.run() {
            Ok(()) => {
                debug!("lexed {} tokens", self.tokens.len());
                Ok(self.tokens)
            },
            Err(err) => {
                debug!("lexing aborted after {} tokens: {}", self.tokens.len(), err);
                Err(err)
            },
        }
    }

    /// The dispatch loop: selects a sub-reader from the current character.
    fn run(&mut self) -> Result<()> {
        if self.config.skip_bom && self.cursor.current() == '\u{FEFF}' {
            self.cursor.advance();
        }

        while !self.cursor.is_at_end() {
            let c = self.cursor.current();

            if is_whitespace(c) || is_newline(c) {
                self.cursor.advance();
                continue;
            }

            self.begin_token();

            if let Some(kind) = punctuation_kind(c) {
                self.cursor.advance();
                self.push_token(kind, TokenValue::Text(c.to_string()));
            } else if is_ident_start(c) {
                self.read_identifier();
            } else if is_operator_start(c) {
                if c == '/' && matches!(self.cursor.peek(1), '/' | '*') {
                    self.read_comment()?;
                } else {
                    self.read_operator()?;
                }
            } else if is_quote(c) {
                self.read_string()?;
            } else if is_digit(c) {
                self.read_number()?;
            } else {
                return Err(self.unrecognized(c));
            }
        }

        Ok(())
    }

    /// Records the cursor position as the start of the next token.
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Appends a token spanning from the recorded start to the cursor.
    pub(crate) fn push_token(&mut self, kind: TokenKind, value: TokenValue) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        let token = Token::new(kind, value, span);
        trace!("{} {:?} at {}", kind, token.value(), span);
        self.tokens.push(token);
    }

    pub(crate) fn malformed_string(&self) -> LexError {
        LexError::MalformedString {
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    pub(crate) fn malformed_number(&self) -> LexError {
        LexError::MalformedNumber {
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    pub(crate) fn unterminated_comment(&self) -> LexError {
        LexError::UnterminatedComment {
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    pub(crate) fn unrecognized(&self, ch: char) -> LexError {
        LexError::UnrecognizedCharacter {
            ch,
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .iter()
            .map(Token::kind)
            .collect()
    }

    #[test]
    fn test_dispatch_each_family() {
        assert_eq!(
            kinds("( foo >= 'bar' 12 )"),
            vec![
                TokenKind::Paren,
                TokenKind::Identifier,
                TokenKind::Comparison,
                TokenKind::String,
                TokenKind::Number,
                TokenKind::Paren,
            ]
        );
    }

    #[test]
    fn test_punctuation_values() {
        let tokens = Lexer::new("{[.:]}").tokenize().unwrap();
        let values: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(values, ["{", "[", ".", ":", "]", "}"]);
        assert_eq!(tokens[2].kind(), TokenKind::Dot);
        assert_eq!(tokens[3].kind(), TokenKind::Colon);
    }

    #[test]
    fn test_spans_track_lines() {
        let tokens = Lexer::new("let\n  x").tokenize().unwrap();
        assert_eq!(tokens[0].span(), Span::new(0, 3, 1, 1));
        assert_eq!(tokens[1].span(), Span::new(6, 7, 2, 3));
    }

    #[test]
    fn test_carriage_return_is_whitespace() {
        assert_eq!(kinds("a\r\nb").len(), 2);
    }

    #[test]
    fn test_tab_is_unrecognized() {
        let err = Lexer::new("a\tb").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '\t',
                line: 1,
                column: 2
            }
        );
    }

    #[test]
    fn test_bom_skipped_by_default() {
        assert_eq!(kinds("\u{FEFF}let"), vec![TokenKind::Keyword]);
    }

    #[test]
    fn test_bom_rejected_when_not_skipped() {
        let config = LexerConfig {
            skip_bom: false,
            ..Default::default()
        };
        let err = Lexer::with_config("\u{FEFF}let", config).tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedCharacter { ch: '\u{FEFF}', .. }));
    }

    #[test]
    fn test_source_limit() {
        let config = LexerConfig {
            max_source_len: Some(4),
            ..Default::default()
        };
        assert!(Lexer::with_config("let", config.clone()).tokenize().is_ok());
        assert_eq!(
            Lexer::with_config("let x", config).tokenize().unwrap_err(),
            LexError::SourceTooLarge { len: 5, max: 4 }
        );
    }
}
