//! Error types for catalog construction

use thiserror::Error;

/// Invariant violations detected while building a catalog
///
/// Lookups never fail; these only surface from [`crate::Catalog::new`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two entries share a name under case-insensitive comparison
    #[error("Duplicate catalog name: '{0}'")]
    DuplicateName(String),

    /// Unit volume is zero, negative or not finite
    #[error("Invalid unit volume {volume} for '{name}'")]
    InvalidVolume {
        /// Name of the offending entry
        name: String,
        /// The rejected volume
        volume: f64,
    },

    /// Entry has an empty canonical name
    #[error("Catalog entry {0} has an empty name")]
    EmptyName(u32),
}
