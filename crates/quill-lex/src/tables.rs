//! Static classification tables.
//!
//! Reserved keywords, single-character punctuation and the operator
//! lexemes with their categories. The tables are immutable `static` data
//! shared by every lexing run.

use crate::token::TokenKind;

/// Reserved keywords.
///
/// `true`, `false` and `null` are literal values and deliberately absent.
pub static KEYWORDS: &[&str] = &["const", "let"];

/// Every operator lexeme paired with its category.
///
/// Categories are looked up by lexeme, so the order of entries carries no
/// meaning.
pub static OPERATORS: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Arithmetic),
    ("-", TokenKind::Arithmetic),
    ("*", TokenKind::Arithmetic),
    ("/", TokenKind::Arithmetic),
    ("^", TokenKind::Arithmetic),
    ("%", TokenKind::Arithmetic),
    (">", TokenKind::Comparison),
    (">=", TokenKind::Comparison),
    ("<", TokenKind::Comparison),
    ("<=", TokenKind::Comparison),
    ("==", TokenKind::Comparison),
    ("!=", TokenKind::Comparison),
    ("=", TokenKind::Assignment),
];

/// Returns true if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns the token kind for a single-character punctuation symbol.
///
/// # Examples
///
/// ```
/// use quill_lex::tables::punctuation_kind;
/// use quill_lex::TokenKind;
///
/// assert_eq!(punctuation_kind('{'), Some(TokenKind::Brace));
/// assert_eq!(punctuation_kind(','), None);
/// ```
pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' | ')' => Some(TokenKind::Paren),
        '{' | '}' => Some(TokenKind::Brace),
        '[' | ']' => Some(TokenKind::Bracket),
        '.' => Some(TokenKind::Dot),
        ':' => Some(TokenKind::Colon),
        _ => None,
    }
}

/// Returns the category of an operator lexeme, or `None` if `lexeme` is not
/// an operator.
///
/// # Examples
///
/// ```
/// use quill_lex::tables::operator_kind;
/// use quill_lex::TokenKind;
///
/// assert_eq!(operator_kind(">="), Some(TokenKind::Comparison));
/// assert_eq!(operator_kind("="), Some(TokenKind::Assignment));
/// assert_eq!(operator_kind("!"), None);
/// ```
pub fn operator_kind(lexeme: &str) -> Option<TokenKind> {
    OPERATORS
        .iter()
        .find(|(op, _)| *op == lexeme)
        .map(|&(_, kind)| kind)
}

/// Returns true if `c` can begin an operator.
///
/// `!` is accepted here even though it is only valid as part of `!=`.
pub fn is_operator_start(c: char) -> bool {
    c == '!' || OPERATORS.iter().any(|(op, _)| op.len() == 1 && op.starts_with(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert!(is_keyword("const"));
        assert!(is_keyword("let"));
        assert!(!is_keyword("true"));
        assert!(!is_keyword("null"));
        assert!(!is_keyword("Let"));
    }

    #[test]
    fn test_operator_categories() {
        for op in ["+", "-", "*", "/", "^", "%"] {
            assert_eq!(operator_kind(op), Some(TokenKind::Arithmetic), "{op}");
        }
        for op in [">", ">=", "<", "<=", "==", "!="] {
            assert_eq!(operator_kind(op), Some(TokenKind::Comparison), "{op}");
        }
        assert_eq!(operator_kind("="), Some(TokenKind::Assignment));
    }

    #[test]
    fn test_non_operators() {
        assert_eq!(operator_kind("!"), None);
        assert_eq!(operator_kind("=>"), None);
        assert_eq!(operator_kind("+="), None);
        assert_eq!(operator_kind(""), None);
    }

    #[test]
    fn test_no_operator_exceeds_two_chars() {
        assert!(OPERATORS.iter().all(|(op, _)| (1..=2).contains(&op.len())));
    }

    #[test]
    fn test_operator_start_chars() {
        for c in ['+', '-', '*', '/', '^', '%', '>', '<', '=', '!'] {
            assert!(is_operator_start(c), "{c}");
        }
        assert!(!is_operator_start('&'));
        assert!(!is_operator_start('.'));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(punctuation_kind('('), Some(TokenKind::Paren));
        assert_eq!(punctuation_kind(']'), Some(TokenKind::Bracket));
        assert_eq!(punctuation_kind('.'), Some(TokenKind::Dot));
        assert_eq!(punctuation_kind(':'), Some(TokenKind::Colon));
        assert_eq!(punctuation_kind(';'), None);
    }
}
