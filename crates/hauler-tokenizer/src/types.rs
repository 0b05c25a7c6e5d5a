//! Records produced by tokenization

use serde::{Deserialize, Serialize};

/// How much of an item a line reports
///
/// A line states either a unit count or a total volume, never both.
/// Serialized as a single `quantity` or `volume` key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amount {
    /// Number of units
    Quantity(u64),

    /// Total volume in cubic meters
    Volume(f64),
}

/// An item name with its amount, not yet checked against any catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizedItem {
    /// Item name exactly as it appeared in the line
    pub type_name: String,

    /// Reported amount
    #[serde(flatten)]
    pub amount: Amount,
}

impl TokenizedItem {
    /// Item reported by unit count
    pub fn with_quantity(type_name: impl Into<String>, quantity: u64) -> Self {
        Self {
            type_name: type_name.into(),
            amount: Amount::Quantity(quantity),
        }
    }

    /// Item reported by total volume
    pub fn with_volume(type_name: impl Into<String>, volume: f64) -> Self {
        Self {
            type_name: type_name.into(),
            amount: Amount::Volume(volume),
        }
    }

    /// Unit count, if the line reported one
    pub fn quantity(&self) -> Option<u64> {
        match self.amount {
            Amount::Quantity(quantity) => Some(quantity),
            Amount::Volume(_) => None,
        }
    }

    /// Volume, if the line reported one
    pub fn volume(&self) -> Option<f64> {
        match self.amount {
            Amount::Volume(volume) => Some(volume),
            Amount::Quantity(_) => None,
        }
    }
}

/// What a single recognizer made of a line
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition {
    /// The line has this recognizer's shape
    Matched(TokenizedItem),

    /// Not this recognizer's shape; try the next one
    Rejected,
}

impl Recognition {
    /// Whether the recognizer accepted the line
    pub fn is_matched(&self) -> bool {
        matches!(self, Recognition::Matched(_))
    }

    /// The extracted item, if any
    pub fn into_item(self) -> Option<TokenizedItem> {
        match self {
            Recognition::Matched(item) => Some(item),
            Recognition::Rejected => None,
        }
    }
}

/// Output of tokenizing a block of text
///
/// Both sequences follow input line order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizationResult {
    /// Lines some recognizer accepted
    pub tokenized_items: Vec<TokenizedItem>,

    /// Trimmed lines no recognizer accepted
    pub failed_lines: Vec<String>,
}
