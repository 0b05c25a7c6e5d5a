//! Catalog entry - one item type in the reference catalog

use serde::{Deserialize, Serialize};

/// A single item type known to the catalog
///
/// Entries are immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Authoritative spelling of the item name
    pub canonical_name: String,

    /// Stable numeric type identifier
    pub identifier: u32,

    /// Volume of one unit, in cubic meters (always > 0)
    pub unit_volume: f64,
}

impl CatalogEntry {
    /// Create a new catalog entry
    ///
    /// # Examples
    ///
    /// ```
    /// use hauler_catalog::CatalogEntry;
    ///
    /// let entry = CatalogEntry::new("Tritanium", 34, 0.01);
    /// assert_eq!(entry.identifier, 34);
    /// ```
    pub fn new(canonical_name: impl Into<String>, identifier: u32, unit_volume: f64) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            identifier,
            unit_volume,
        }
    }

    /// Whether `name` refers to this entry under case-insensitive comparison
    pub fn matches(&self, name: &str) -> bool {
        names_equal(&self.canonical_name, name)
    }
}

/// Case-insensitive name equality without allocating lowered copies
pub(crate) fn names_equal(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_case() {
        let entry = CatalogEntry::new("Co-Processor II", 3888, 5.0);
        assert!(entry.matches("co-processor ii"));
        assert!(entry.matches("CO-PROCESSOR II"));
        assert!(!entry.matches("Co-Processor I"));
    }

    #[test]
    fn test_matches_is_exact() {
        let entry = CatalogEntry::new("Tritanium", 34, 0.01);
        assert!(!entry.matches("Tritaniumm"));
        assert!(!entry.matches(" Tritanium"));
        assert!(!entry.matches(""));
    }

    #[test]
    fn test_names_equal_non_ascii() {
        assert!(names_equal("Ärmor", "ärmor"));
        assert!(!names_equal("Ärmor", "armor"));
    }
}
