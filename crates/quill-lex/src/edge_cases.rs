//! Edge case tests for quill-lex
