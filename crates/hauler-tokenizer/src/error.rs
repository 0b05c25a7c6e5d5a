//! Error types for the Tokenizer

use thiserror::Error;

/// Errors raised while configuring a tokenizer
///
/// Tokenizing itself never fails; rejected lines are part of the result.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed into a configuration
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// Configuration could not be written as TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),
}

impl From<toml::de::Error> for TokenizerError {
    fn from(e: toml::de::Error) -> Self {
        TokenizerError::TomlParse(e.to_string())
    }
}

impl From<toml::ser::Error> for TokenizerError {
    fn from(e: toml::ser::Error) -> Self {
        TokenizerError::TomlSerialize(e.to_string())
    }
}
