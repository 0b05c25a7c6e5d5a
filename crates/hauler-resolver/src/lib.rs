//! Hauler Resolver
//!
//! Joins tokenized inventory lines against the item catalog.
//!
//! # Architecture
//!
//! ```text
//! text → Tokenizer → { tokenized items, failed lines }
//!                         ↓
//!                 Resolver (Catalog) → { resolved items, failed lines }
//! ```
//!
//! Lines no recognizer accepted and names the catalog does not know both end
//! up in `failed_lines`, tokenizer failures first. Nothing here returns an
//! error for bad input.
//!
//! # Example Usage
//!
//! ```
//! use hauler_resolver::parse;
//!
//! let result = parse("Tritanium 3269\nCobaltite: 15,828,569.1 m³\nTritaniumm");
//!
//! assert_eq!(result.items[0].type_id, 34);
//! assert_eq!(result.items[0].quantity, 3269);
//! // loose ore reported by volume becomes whole units
//! assert_eq!(result.items[1].quantity, 1582856);
//! assert_eq!(result.failed_lines, vec!["Tritaniumm"]);
//! ```
//!
//! With a substitute catalog and a restricted recognizer chain:
//!
//! ```
//! use hauler_resolver::{Catalog, CatalogEntry, Resolver, TokenizerConfig};
//!
//! let catalog = Catalog::new(vec![CatalogEntry::new("Widget", 7, 0.5)]).unwrap();
//! let resolver = Resolver::from_config(&catalog, &TokenizerConfig::structured_only()).unwrap();
//!
//! let result = resolver.parse("Widget\t4\tStuff\nWidget 2");
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.failed_lines, vec!["Widget 2"]);
//! ```

#![warn(missing_docs)]

mod resolver;
mod types;

pub use resolver::{parse, Resolver};
pub use types::{ParsingResult, ResolvedItem};

pub use hauler_catalog::{lookup, Catalog, CatalogEntry, CatalogError, LookupResult};
pub use hauler_tokenizer::{
    tokenize, Amount, TokenizationResult, TokenizedItem, Tokenizer, TokenizerConfig,
    TokenizerError,
};
