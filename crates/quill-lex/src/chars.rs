//! Character classification predicates used by the lexer.
//!
//! All predicates are pure functions of a single character. Letters are
//! recognised with a case-fold heuristic rather than the full Unicode
//! identifier tables: a character counts as a letter when its upper- and
//! lower-case forms differ.

/// Returns true for the line-feed character only.
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Returns true for space and carriage return.
///
/// Tabs and other Unicode whitespace are not skipped by the lexer.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\r'
}

/// Returns true for the decimal digits `0`-`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` has distinct upper- and lower-case forms.
///
/// # Examples
///
/// ```
/// use quill_lex::chars::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Ж'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('7'));
/// assert!(!is_letter('中'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.to_uppercase().ne(c.to_lowercase())
}

/// Returns true if `c` may begin an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Returns true if `c` may continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Returns true for the two string delimiters, `'` and `"`.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_is_line_feed_only() {
        assert!(is_newline('\n'));
        assert!(!is_newline('\r'));
        assert!(!is_whitespace('\n'));
    }

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\t'));
        assert!(!is_whitespace('\u{00A0}'));
    }

    #[test]
    fn test_digits_are_ascii() {
        assert!(('0'..='9').all(is_digit));
        assert!(!is_digit('٣'));
        assert!(!is_digit('x'));
    }

    #[test]
    fn test_letter_heuristic() {
        assert!(is_letter('Z'));
        assert!(is_letter('é'));
        assert!(is_letter('ß'));
        assert!(is_letter('Ω'));
        assert!(!is_letter('$'));
        assert!(!is_letter('あ'));
        assert!(!is_letter('\u{FEFF}'));
    }

    #[test]
    fn test_ident_chars() {
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('1'));
        assert!(is_ident_continue('1'));
        assert!(!is_ident_continue('-'));
    }
}
