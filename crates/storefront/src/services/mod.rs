//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `catalog` - Product list owned by the shop, loaded from and saved to storage
//! - `editor` - Admin create/update/delete/search over the catalog
//! - `theme` - Persisted light/dark preference
//!
//! Services take their storage explicitly; nothing reads ambient globals.

pub mod catalog;
pub mod editor;
pub mod theme;

pub use catalog::{CatalogSource, CatalogStore};
pub use editor::{Applied, CatalogStats, EditOutcome, EditorError};
