//! Configuration Module - Lexer Options
//!
//! Most callers use [`LexerConfig::default`]. Hosts that keep settings in a
//! file can load them from TOML with [`LexerConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling a lexing run.
///
/// # Examples
///
/// ```rust
/// use quill_lex::LexerConfig;
///
/// // Use default configuration
/// let config = LexerConfig::default();
/// assert!(!config.allow_unterminated_block_comment);
///
/// // Accept `/* ...` running to the end of input
/// let config = LexerConfig {
///     allow_unterminated_block_comment: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Treat a block comment that reaches end of input as closed instead of
    /// failing with `UnterminatedComment`.
    ///
    /// Default: false
    #[serde(default)]
    pub allow_unterminated_block_comment: bool,

    /// Skip a U+FEFF byte-order mark at the very start of the source.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// Reject sources longer than this many bytes before scanning.
    ///
    /// Default: None (unlimited)
    #[serde(default)]
    pub max_source_len: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            allow_unterminated_block_comment: false,
            skip_bom: true,
            max_source_len: None,
        }
    }
}

/// Errors produced while loading a [`LexerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration.
    #[error("Invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value outside its accepted range.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the rejected field.
        field: &'static str,
        /// What the field requires.
        reason: &'static str,
    },
}

impl LexerConfig {
    /// Parses a configuration from TOML. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("max_source_len = 4096").unwrap();
    /// assert_eq!(config.max_source_len, Some(4096));
    /// assert!(config.skip_bom);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: LexerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field values that the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_source_len == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_source_len",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
