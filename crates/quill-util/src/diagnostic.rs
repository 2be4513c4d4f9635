//! Diagnostic module - Error reporting infrastructure.
//!
//! Provides types for turning a failure location into a readable report
//! with the offending source line and a caret under the reported column.
//!
//! # Examples
//!
//! ```
//! use quill_util::diagnostic::{Diagnostic, SourceSnippet};
//! use quill_util::Span;
//!
//! let diag = Diagnostic::error("unrecognized character '@'", Span::point(1, 9))
//!     .with_snippet(SourceSnippet::point("let x = @", 1, 9));
//! let report = diag.render();
//! assert!(report.starts_with("error: unrecognized character '@'"));
//! ```

use crate::Span;
use std::fmt;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x = 42;", 1, 5, 6, Some("variable name"));
/// assert!(snippet.format().contains("^ variable name"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet highlighting a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its line number, followed by a
    /// caret line pointing at the highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// An error report with its location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            notes: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the full report: header, location, snippets, then notes.
    pub fn render(&self) -> String {
        let mut out = format!("error: {}\n", self.message);
        out.push_str(&format!("  --> {}\n", self.span));
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} at {}", self.message, self.span)
    }
}

/// Returns the text of the 1-based `line` in `source` without its line ending.
///
/// # Examples
///
/// ```
/// use quill_util::diagnostic::line_at;
///
/// assert_eq!(line_at("a\r\nb\nc", 2), Some("b"));
/// assert_eq!(line_at("a\nb", 3), None);
/// ```
pub fn line_at(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|l| l.trim_end_matches('\r'))
}
