//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch loop
//! - `identifier` - Identifier, keyword and literal-word lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator lexing
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
