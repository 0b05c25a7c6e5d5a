//! Hauler Tokenizer
//!
//! Turns copy-pasted game inventory text into `(item name, amount)` records.
//!
//! # Overview
//!
//! Pasted text has no declared schema. Every line is offered to a fixed,
//! ordered chain of recognizers; the first one that accepts the line decides
//! how it is read, and lines nobody accepts are reported back verbatim.
//!
//! ```text
//! line → inventory/contract → moon ping → manual entry → failed_lines
//! ```
//!
//! | Recognizer | Shape | Amount |
//! |------------|-------|--------|
//! | Inventory / contract | `Name<TAB>24.647<TAB>...` | unit quantity |
//! | Moon ping | `Name: 15,828,569 m³` | volume (m³) |
//! | Manual entry | `Name 3269` or `Name` | unit quantity |
//!
//! The chain is ordered from most to least specific and that order never
//! changes; configuration can only remove recognizers from it.
//!
//! # Example Usage
//!
//! ```
//! use hauler_tokenizer::{tokenize, Amount};
//!
//! let result = tokenize("Tritanium 3269\nCobaltite: 15,828,569 m³\n???");
//!
//! assert_eq!(result.tokenized_items.len(), 2);
//! assert_eq!(result.tokenized_items[0].type_name, "Tritanium");
//! assert_eq!(result.tokenized_items[0].amount, Amount::Quantity(3269));
//! assert_eq!(result.tokenized_items[1].amount, Amount::Volume(15828569.0));
//! assert_eq!(result.failed_lines, vec!["???"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
pub mod recognizer;
mod tokenizer;
mod types;


pub use config::TokenizerConfig;
pub use error::TokenizerError;
pub use recognizer::RecognizerKind;
pub use tokenizer::{tokenize, Tokenizer};
pub use types::{Amount, Recognition, TokenizationResult, TokenizedItem};
