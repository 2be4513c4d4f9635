//! quill-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the quill toolchain crates:
//!
//! - [`span`] - Source location tracking
//! - [`diagnostic`] - Human-readable error reports with source snippets

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, SourceSnippet};
pub use span::Span;
