//! Core Resolver implementation

use hauler_catalog::{Catalog, CatalogEntry, LookupResult};
use hauler_tokenizer::{
    Amount, TokenizationResult, TokenizedItem, Tokenizer, TokenizerConfig, TokenizerError,
};
use tracing::{debug, info};

use crate::types::{ParsingResult, ResolvedItem};

/// Resolves pasted text into catalog-backed items
///
/// The catalog is injected, so tests and embedders can swap in their own.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    tokenizer: Tokenizer,
}

impl<'a> Resolver<'a> {
    /// Create a Resolver from a catalog and a tokenizer
    pub fn new(catalog: &'a Catalog, tokenizer: Tokenizer) -> Self {
        Self { catalog, tokenizer }
    }

    /// Create a Resolver whose tokenizer is built from `config`
    pub fn from_config(
        catalog: &'a Catalog,
        config: &TokenizerConfig,
    ) -> Result<Self, TokenizerError> {
        Ok(Self::new(catalog, Tokenizer::new(config)?))
    }

    /// The catalog names are resolved against
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Tokenize `text`, then resolve every tokenized item
    pub fn parse(&self, text: &str) -> ParsingResult {
        let result = self.resolve(self.tokenizer.tokenize(text));

        info!(
            "Parsed {} items, {} failed lines",
            result.items.len(),
            result.failed_lines.len()
        );

        result
    }

    /// Resolve already-tokenized items
    ///
    /// Names missing from the catalog are appended to the tokenizer's failed
    /// lines, keeping their relative order.
    pub fn resolve(&self, tokenized: TokenizationResult) -> ParsingResult {
        let TokenizationResult {
            tokenized_items,
            mut failed_lines,
        } = tokenized;

        let mut items = Vec::with_capacity(tokenized_items.len());

        for item in tokenized_items {
            match self.resolve_item(&item) {
                Some(resolved) => items.push(resolved),
                None => {
                    debug!("Could not resolve {:?}", item.type_name);
                    failed_lines.push(item.type_name);
                }
            }
        }

        ParsingResult {
            items,
            failed_lines,
        }
    }

    /// Resolve one item
    ///
    /// `None` if the catalog does not know its name, or if its volume stands
    /// for more units than a `u64` holds.
    pub fn resolve_item(&self, item: &TokenizedItem) -> Option<ResolvedItem> {
        match self.catalog.lookup(&item.type_name) {
            LookupResult::Found(entry) => Some(ResolvedItem {
                type_id: entry.identifier,
                type_name: entry.canonical_name.clone(),
                quantity: unit_count(&item.amount, entry)?,
            }),
            LookupResult::Missing => None,
        }
    }
}

impl Default for Resolver<'static> {
    /// Built-in catalog, every recognizer enabled
    fn default() -> Self {
        Self::new(Catalog::builtin(), Tokenizer::default())
    }
}

/// Parse `text` against the built-in catalog
pub fn parse(text: &str) -> ParsingResult {
    Resolver::default().parse(text)
}

/// Whole units an amount stands for; volumes round down
///
/// `None` when the unit count does not fit in a `u64`.
fn unit_count(amount: &Amount, entry: &CatalogEntry) -> Option<u64> {
    match *amount {
        Amount::Quantity(quantity) => Some(quantity),
        Amount::Volume(volume) => {
            let units = (volume / entry.unit_volume).floor();
            // u64::MAX rounds up to 2^64 as f64, so anything below it fits
            (units < u64::MAX as f64).then_some(units as u64)
        }
    }
}
