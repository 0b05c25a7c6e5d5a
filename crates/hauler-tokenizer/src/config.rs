//! Configuration for the Tokenizer

use serde::{Deserialize, Serialize};

use crate::error::TokenizerError;
use crate::recognizer::RecognizerKind;

/// Which recognizers take part in the chain
///
/// Disabling a recognizer drops it from the chain; the remaining ones keep
/// their fixed priority order.
///
/// # Examples
///
/// ```
/// use hauler_tokenizer::TokenizerConfig;
///
/// let config = TokenizerConfig::from_toml("manual_entry = false").unwrap();
/// assert!(config.inventory_or_contract);
/// assert!(config.moon_ping);
/// assert!(!config.manual_entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Tab-delimited inventory and contract rows
    #[serde(default = "default_enabled")]
    pub inventory_or_contract: bool,

    /// `Name: <volume> m³` mining chat messages
    #[serde(default = "default_enabled")]
    pub moon_ping: bool,

    /// Free-typed `Name <quantity>` lines and bare names
    #[serde(default = "default_enabled")]
    pub manual_entry: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for TokenizerConfig {
    /// Every recognizer enabled
    fn default() -> Self {
        Self {
            inventory_or_contract: true,
            moon_ping: true,
            manual_entry: true,
        }
    }
}

impl TokenizerConfig {
    /// Structured-only preset: accept delimiter-shaped exports, never guess
    /// at free-typed text
    pub fn structured_only() -> Self {
        Self {
            inventory_or_contract: true,
            moon_ping: true,
            manual_entry: false,
        }
    }

    /// Whether `kind` takes part in the chain
    pub fn is_enabled(&self, kind: RecognizerKind) -> bool {
        match kind {
            RecognizerKind::InventoryOrContract => self.inventory_or_contract,
            RecognizerKind::MoonPing => self.moon_ping,
            RecognizerKind::ManualEntry => self.manual_entry,
        }
    }

    /// Enabled recognizers in priority order
    pub fn chain(&self) -> Vec<RecognizerKind> {
        RecognizerKind::PRIORITY
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TokenizerError> {
        if self.chain().is_empty() {
            return Err(TokenizerError::Config(
                "at least one recognizer must be enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, TokenizerError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, TokenizerError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
