//! Number literal lexing.
//!
//! This module handles hexadecimal integers and decimal numbers with
//! optional fraction and exponent. Every number becomes an `f64`.

use crate::chars::{is_digit, is_letter};
use crate::error::Result;
use crate::token::{TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0xFF`, `0Xab`
    /// - Decimal: `42`, `3.14`, `1e10`, `2.5E-3`, `1_000_000`
    ///
    /// # Returns
    ///
    /// `Ok` after appending a `Number` token, or `MalformedNumber` when the
    /// literal text does not parse. Literals too large for `f64` become
    /// infinity.
    pub(crate) fn read_number(&mut self) -> Result<()> {
        let value = if self.cursor.current() == '0' && matches!(self.cursor.peek(1), 'x' | 'X') {
            self.read_hex()?
        } else {
            self.read_decimal()?
        };

        self.push_token(TokenKind::Number, TokenValue::Number(value));
        Ok(())
    }

    /// Lexes `0x` followed by a greedy run of digits and letters.
    ///
    /// Letters outside `a-f` are part of the run, which then fails to parse.
    /// Any number of digits is accepted; the value is rounded to `f64`.
    fn read_hex(&mut self) -> Result<f64> {
        self.cursor.advance();
        self.cursor.advance();

        let digits_start = self.cursor.position();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current();
            if is_digit(c) || is_letter(c) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let digits = self.cursor.slice_from(digits_start);
        if digits.is_empty() {
            return Err(self.malformed_number());
        }

        digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(16)
                .map(|digit| acc * 16.0 + f64::from(digit))
                .ok_or_else(|| self.malformed_number())
        })
    }

    /// Lexes a decimal number.
    ///
    /// At most one decimal point and one exponent marker are accepted over
    /// the whole literal; a second one is an error. Underscores are skipped.
    fn read_decimal(&mut self) -> Result<f64> {
        let mut text = String::new();
        let mut seen_decimal = false;
        let mut seen_exponent = false;

        while !self.cursor.is_at_end() {
            match self.cursor.current() {
                '_' => {
                    self.cursor.advance();
                },
                c if is_digit(c) => {
                    text.push(self.cursor.advance());
                },
                '.' => {
                    if seen_decimal {
                        return Err(self.malformed_number());
                    }
                    seen_decimal = true;
                    text.push(self.cursor.advance());
                },
                'e' | 'E' => {
                    if seen_exponent {
                        return Err(self.malformed_number());
                    }
                    seen_exponent = true;
                    text.push(self.cursor.advance());
                    if matches!(self.cursor.current(), '+' | '-') {
                        text.push(self.cursor.advance());
                    }
                },
                _ => break,
            }
        }

        text.parse::<f64>().map_err(|_| self.malformed_number())
    }
}
