//! Resolved records

use serde::{Deserialize, Serialize};

/// An item backed by a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// Catalog identifier
    pub type_id: u32,

    /// Catalog's canonical spelling
    pub type_name: String,

    /// Whole units, volumes converted through the unit volume and floored
    pub quantity: u64,
}

/// Output of parsing a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingResult {
    /// Items found in the catalog, in line order
    pub items: Vec<ResolvedItem>,

    /// Unrecognized lines, then names missing from the catalog
    pub failed_lines: Vec<String>,
}
