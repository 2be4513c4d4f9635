//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing a range of
//! source text together with the human-readable line/column of its start.
//!
//! # Examples
//!
//! ```
//! use quill_util::span::Span;
//!
//! // "let" at the very start of a file
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(span.to_string(), "1:1");
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the first character (for human-readable output)
///
/// # Examples
///
/// ```
/// use quill_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.line, 2);
///
/// let point = Span::point(1, 5);
/// assert_eq!(point.start, point.end);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point with no byte extent
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(3, 9, 2, 4);
        assert_eq!((span.start, span.end), (3, 9));
        assert_eq!(span.to_string(), "2:4");
    }

    #[test]
    fn test_point_has_no_extent() {
        let point = Span::point(7, 1);
        assert_eq!((point.start, point.end), (0, 0));
        assert_eq!(point.to_string(), "7:1");
    }
}
