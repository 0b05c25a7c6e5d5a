//! Hauler Catalog
//!
//! The static reference catalog of item types that pasted inventory text is
//! resolved against. It is the domain layer of Hauler: it performs no I/O and
//! depends on nothing but `serde` and `thiserror`.
//!
//! ## Key Concepts
//!
//! - **Catalog entry**: a canonical item name, its stable numeric identifier
//!   and the volume of a single unit in cubic meters
//! - **Canonical name**: the catalog's authoritative spelling, returned by a
//!   lookup regardless of the casing the caller used
//! - **Lookup**: case-insensitive exact name match; a miss is a normal return
//!   value, never an error
//!
//! # Example
//!
//! ```
//! use hauler_catalog::{lookup, Catalog, CatalogEntry};
//!
//! // The built-in reference table
//! let found = lookup("TRITANIUM");
//! assert_eq!(found.type_id(), Some(34));
//! assert_eq!(found.type_name(), Some("Tritanium"));
//!
//! // A substitute catalog, injected wherever a catalog is needed
//! let catalog = Catalog::new(vec![CatalogEntry::new("Widget", 7, 2.5)]).unwrap();
//! assert!(catalog.lookup("widget").is_found());
//! assert!(catalog.lookup("Gadget").is_missing());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod entry;
pub mod error;
mod table;

// Re-exports for convenience
pub use catalog::{lookup, Catalog, LookupResult};
pub use entry::CatalogEntry;
pub use error::CatalogError;
