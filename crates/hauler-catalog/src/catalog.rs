//! Catalog module - the read-only reference table and its lookup

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::table::BUILTIN_ENTRIES;

/// Outcome of a catalog lookup
///
/// A miss is an ordinary value: callers branch on it instead of handling an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupResult<'a> {
    /// The name matched this entry
    Found(&'a CatalogEntry),

    /// No entry carries the name
    Missing,
}

impl<'a> LookupResult<'a> {
    /// Canonical name of the matched entry
    pub fn type_name(&self) -> Option<&'a str> {
        self.entry().map(|e| e.canonical_name.as_str())
    }

    /// Identifier of the matched entry
    pub fn type_id(&self) -> Option<u32> {
        self.entry().map(|e| e.identifier)
    }

    /// Unit volume of the matched entry
    pub fn type_volume(&self) -> Option<f64> {
        self.entry().map(|e| e.unit_volume)
    }

    /// The matched entry, if any
    pub fn entry(&self) -> Option<&'a CatalogEntry> {
        match self {
            LookupResult::Found(entry) => Some(entry),
            LookupResult::Missing => None,
        }
    }

    /// Whether the lookup matched an entry
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Whether the lookup found nothing
    pub fn is_missing(&self) -> bool {
        matches!(self, LookupResult::Missing)
    }
}

/// Immutable catalog of item types
///
/// Built once and then only read. Pass it explicitly to whatever needs to
/// resolve names; [`Catalog::builtin`] is the shared reference instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, checking that names are non-empty and unique
    /// (case-insensitive) and that every unit volume is finite and positive
    ///
    /// # Examples
    ///
    /// ```
    /// use hauler_catalog::{Catalog, CatalogEntry, CatalogError};
    ///
    /// let dup = Catalog::new(vec![
    ///     CatalogEntry::new("Widget", 1, 1.0),
    ///     CatalogEntry::new("WIDGET", 2, 1.0),
    /// ]);
    /// assert_eq!(dup, Err(CatalogError::DuplicateName("WIDGET".to_string())));
    /// ```
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.canonical_name.is_empty() {
                return Err(CatalogError::EmptyName(entry.identifier));
            }
            if !entry.unit_volume.is_finite() || entry.unit_volume <= 0.0 {
                return Err(CatalogError::InvalidVolume {
                    name: entry.canonical_name.clone(),
                    volume: entry.unit_volume,
                });
            }
            if !seen.insert(entry.canonical_name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(entry.canonical_name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in reference catalog, shared for the lifetime of the process
    ///
    /// The whole table is built inside the first call, before that call
    /// returns, so no lookup ever sees a partially loaded catalog. Entries are
    /// never added afterwards.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|&(name, id, volume)| CatalogEntry::new(name, id, volume))
                .collect(),
        })
    }

    /// Find the entry whose canonical name equals `name`, ignoring case
    ///
    /// # Examples
    ///
    /// ```
    /// use hauler_catalog::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.lookup("tritanium").type_name(), Some("Tritanium"));
    /// assert!(catalog.lookup("Tritaniumm").is_missing());
    /// ```
    pub fn lookup(&self, name: &str) -> LookupResult<'_> {
        self.entries
            .iter()
            .find(|entry| entry.matches(name))
            .map_or(LookupResult::Missing, LookupResult::Found)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

/// Look up `name` in the built-in reference catalog
pub fn lookup(name: &str) -> LookupResult<'static> {
    Catalog::builtin().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_item() {
        let result = lookup("Tritanium");
        assert_eq!(result.type_name(), Some("Tritanium"));
        assert_eq!(result.type_id(), Some(34));
        assert_eq!(result.type_volume(), Some(0.01));
    }

    #[test]
    fn test_lookup_item_name_with_space() {
        let result = lookup("Overdrive Injector System II");
        assert_eq!(result.type_name(), Some("Overdrive Injector System II"));
        assert_eq!(result.type_id(), Some(1236));
        assert_eq!(result.type_volume(), Some(5.0));
    }

    #[test]
    fn test_lookup_typo_is_missing() {
        let result = lookup("Tritaniumm");
        assert_eq!(result, LookupResult::Missing);
        assert_eq!(result.type_name(), None);
        assert_eq!(result.type_id(), None);
        assert_eq!(result.type_volume(), None);
    }

    #[test]
    fn test_lookup_returns_canonical_casing() {
        let lower = lookup("tritanium");
        let upper = lookup("TRITANIUM");
        assert_eq!(lower.type_id(), Some(34));
        assert_eq!(upper.type_id(), Some(34));
        assert_eq!(lower.type_name(), Some("Tritanium"));
        assert_eq!(upper.type_name(), Some("Tritanium"));
    }

    #[test]
    fn test_builtin_table_satisfies_invariants() {
        let entries: Vec<_> = Catalog::builtin().iter().cloned().collect();
        let rebuilt = Catalog::new(entries);
        assert!(rebuilt.is_ok(), "builtin table invalid: {:?}", rebuilt.err());
        assert!(!Catalog::builtin().is_empty());
    }

    #[test]
    fn test_builtin_is_complete_and_shared() {
        let first = Catalog::builtin();
        assert_eq!(first.len(), BUILTIN_ENTRIES.len());
        assert!(std::ptr::eq(first, Catalog::builtin()));
    }

    #[test]
    fn test_substitute_catalog() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Widget", 1, 2.0),
            CatalogEntry::new("Gadget", 2, 0.5),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("gadget").type_id(), Some(2));
        assert!(catalog.lookup("Tritanium").is_missing());
    }

    #[test]
    fn test_rejects_duplicate_names_ignoring_case() {
        let result = Catalog::new(vec![
            CatalogEntry::new("Widget", 1, 2.0),
            CatalogEntry::new("widget", 2, 2.0),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateName("widget".to_string())));
    }

    #[test]
    fn test_rejects_bad_volume() {
        for volume in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Catalog::new(vec![CatalogEntry::new("Widget", 1, volume)]);
            assert!(
                matches!(result, Err(CatalogError::InvalidVolume { .. })),
                "volume {} accepted",
                volume
            );
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = Catalog::new(vec![CatalogEntry::new("", 9, 1.0)]);
        assert_eq!(result, Err(CatalogError::EmptyName(9)));
    }

    #[test]
    fn test_empty_catalog_misses_everything() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("Tritanium").is_missing());
    }
}
