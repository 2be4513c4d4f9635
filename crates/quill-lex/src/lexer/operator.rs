//! Operator lexing.
//!
//! Operators are read with maximal munch: a one-character operator is
//! extended to two characters whenever the pair is itself an operator.

use crate::error::Result;
use crate::tables::operator_kind;
use crate::token::TokenValue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an arithmetic, comparison or assignment operator.
    ///
    /// Handles: `+ - * / ^ %`, `> >= < <= == !=`, `=`
    ///
    /// A `!` not followed by `=` is rejected as an unrecognized character.
    pub(crate) fn read_operator(&mut self) -> Result<()> {
        let first = self.cursor.advance();

        if !self.cursor.is_at_end() {
            let pair: String = [first, self.cursor.current()].iter().collect();
            if let Some(kind) = operator_kind(&pair) {
                self.cursor.advance();
                self.push_token(kind, TokenValue::Text(pair));
                return Ok(());
            }
        }

        let lexeme = first.to_string();
        match operator_kind(&lexeme) {
            Some(kind) => {
                self.push_token(kind, TokenValue::Text(lexeme));
                Ok(())
            },
            None => Err(self.unrecognized(first)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_ops(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn lex_op(source: &str) -> Token {
        let mut tokens = lex_ops(source);
        assert_eq!(tokens.len(), 1, "{source:?}");
        tokens.remove(0)
    }

    #[test]
    fn test_arithmetic() {
        for op in ["+", "-", "*", "/", "^", "%"] {
            assert!(lex_op(op).is(TokenKind::Arithmetic, op), "{op}");
        }
    }

    #[test]
    fn test_comparison() {
        for op in [">", ">=", "<", "<=", "==", "!="] {
            assert!(lex_op(op).is(TokenKind::Comparison, op), "{op}");
        }
    }

    #[test]
    fn test_assignment() {
        assert!(lex_op("=").is(TokenKind::Assignment, "="));
    }

    #[test]
    fn test_maximal_munch_at_end_of_input() {
        let tokens = lex_ops("a<=");
        assert!(tokens[1].is(TokenKind::Comparison, "<="));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_triple_equals_splits() {
        let tokens = lex_ops("===");
        assert!(tokens[0].is(TokenKind::Comparison, "=="));
        assert!(tokens[1].is(TokenKind::Assignment, "="));
    }

    #[test]
    fn test_unlisted_pairs_split() {
        let tokens = lex_ops("+=");
        assert!(tokens[0].is(TokenKind::Arithmetic, "+"));
        assert!(tokens[1].is(TokenKind::Assignment, "="));

        let tokens = lex_ops("=>");
        assert!(tokens[0].is(TokenKind::Assignment, "="));
        assert!(tokens[1].is(TokenKind::Comparison, ">"));

        let tokens = lex_ops("--");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_lone_bang_is_unrecognized() {
        let err = Lexer::new("x = !y").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '!',
                line: 1,
                column: 5
            }
        );
        assert!(Lexer::new("!").tokenize().is_err());
    }

    #[test]
    fn test_star_is_not_a_comment_opener() {
        let tokens = lex_ops("2 +* 3");
        assert_eq!(tokens.len(), 4);
        assert!(tokens[2].is(TokenKind::Arithmetic, "*"));
    }
}
