//! Core Tokenizer implementation

use tracing::{debug, info};

use crate::config::TokenizerConfig;
use crate::error::TokenizerError;
use crate::recognizer::RecognizerKind;
use crate::types::{Recognition, TokenizationResult, TokenizedItem};

/// Runs every line of a text block through the recognizer chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    chain: Vec<RecognizerKind>,
}

impl Tokenizer {
    /// Create a Tokenizer from a validated configuration
    pub fn new(config: &TokenizerConfig) -> Result<Self, TokenizerError> {
        config.validate()?;
        Ok(Self {
            chain: config.chain(),
        })
    }

    /// Recognizers in the order they are tried
    pub fn chain(&self) -> &[RecognizerKind] {
        &self.chain
    }

    /// Try each recognizer on an already-trimmed line, stopping at the first match
    pub fn recognize_line(&self, line: &str) -> Option<(RecognizerKind, TokenizedItem)> {
        self.chain.iter().find_map(|kind| match kind.recognize(line) {
            Recognition::Matched(item) => Some((*kind, item)),
            Recognition::Rejected => None,
        })
    }

    /// Tokenize a block of pasted text
    ///
    /// Lines are split on `\n` or `\r\n` and trimmed. Every line ends up in
    /// exactly one of the two output sequences, in input order; blank lines
    /// count as failed.
    pub fn tokenize(&self, text: &str) -> TokenizationResult {
        let mut result = TokenizationResult::default();

        for (index, line) in split_lines(text).enumerate() {
            let line = trim_line(line);

            match self.recognize_line(line) {
                Some((kind, item)) => {
                    debug!("Line {} recognized as {}: {:?}", index + 1, kind.as_str(), item);
                    result.tokenized_items.push(item);
                }
                None => {
                    debug!("Line {} matched no recognizer: {:?}", index + 1, line);
                    result.failed_lines.push(line.to_string());
                }
            }
        }

        info!(
            "Tokenized {} items, {} failed lines",
            result.tokenized_items.len(),
            result.failed_lines.len()
        );

        result
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            chain: RecognizerKind::PRIORITY.to_vec(),
        }
    }
}

/// Tokenize `text` with every recognizer enabled
pub fn tokenize(text: &str) -> TokenizationResult {
    Tokenizer::default().tokenize(text)
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Strip surrounding whitespace, including a byte-order mark left by the clipboard
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        assert_eq!(Tokenizer::default().chain(), &RecognizerKind::PRIORITY);
    }

    #[test]
    fn test_new_rejects_empty_chain() {
        let config = TokenizerConfig {
            inventory_or_contract: false,
            moon_ping: false,
            manual_entry: false,
        };
        assert!(Tokenizer::new(&config).is_err());
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_keeps_trailing_blank() {
        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn test_trim_line() {
        assert_eq!(trim_line("  Foo 1 \t"), "Foo 1");
        assert_eq!(trim_line("\u{feff}Foo 1"), "Foo 1");
        assert_eq!(trim_line("   "), "");
    }

    #[test]
    fn test_tab_line_prefers_inventory() {
        let tokenizer = Tokenizer::default();
        let (kind, item) = tokenizer.recognize_line("Warrior II\t5\tCombat Drone").unwrap();
        assert_eq!(kind, RecognizerKind::InventoryOrContract);
        assert_eq!(item, TokenizedItem::with_quantity("Warrior II", 5));
    }

    #[test]
    fn test_moon_ping_beats_manual_entry() {
        let tokenizer = Tokenizer::default();
        let (kind, _) = tokenizer.recognize_line("Cobaltite: 100 m3").unwrap();
        assert_eq!(kind, RecognizerKind::MoonPing);
    }

    #[test]
    fn test_structured_only_fails_manual_lines() {
        let tokenizer = Tokenizer::new(&TokenizerConfig::structured_only()).unwrap();
        let result = tokenizer.tokenize("Tritanium 3269\nCobaltite: 100 m3");
        assert_eq!(
            result.tokenized_items,
            vec![TokenizedItem::with_volume("Cobaltite", 100.0)]
        );
        assert_eq!(result.failed_lines, vec!["Tritanium 3269"]);
    }

    #[test]
    fn test_blank_lines_are_failures() {
        let result = tokenize("Tritanium 1\n\n  \nPyerite 2\n");
        assert_eq!(result.tokenized_items.len(), 2);
        assert_eq!(result.failed_lines, vec!["", "", ""]);
    }
}
