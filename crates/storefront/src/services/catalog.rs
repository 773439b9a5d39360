//! Catalog store.
//!
//! Owns the product list. The list is loaded once at startup and replaced
//! wholesale on every mutation; each replacement is written through to
//! storage immediately. There is no partial-update API and no validation:
//! callers (the admin editor) keep ids unique.

use std::sync::Arc;

use elyosr_core::seed::default_products;
use elyosr_core::{Product, ProductId};
use tracing::instrument;

use crate::storage::{LocalStore, StorageError, keys};

/// Where the in-memory catalog came from at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Read from storage.
    Stored,
    /// Storage was empty; the default list was written to it.
    Seeded,
    /// Storage held something unreadable; the default list is in use but
    /// storage was left untouched until the next save.
    Fallback,
}

/// The shop's product list plus the storage it persists to.
pub struct CatalogStore {
    storage: Arc<dyn LocalStore>,
    products: Vec<Product>,
    source: CatalogSource,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("products", &self.products.len())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Load the catalog from `storage`, seeding it on first run.
    ///
    /// Never fails: an absent catalog is seeded, and an unreadable one falls
    /// back to the default list with a warning.
    #[instrument(skip(storage))]
    pub fn load(storage: Arc<dyn LocalStore>) -> Self {
        let (products, source) = match storage.get(keys::PRODUCTS) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Product>>(&json) {
                Ok(products) => (products, CatalogSource::Stored),
                Err(e) => {
                    tracing::warn!(error = %e, "stored catalog is not valid JSON, using defaults");
                    (default_products(), CatalogSource::Fallback)
                }
            },
            Ok(None) => {
                let products = default_products();
                if let Err(e) = persist(storage.as_ref(), &products) {
                    tracing::warn!(error = %e, "failed to persist seeded catalog");
                }
                (products, CatalogSource::Seeded)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored catalog, using defaults");
                (default_products(), CatalogSource::Fallback)
            }
        };

        tracing::info!(products = products.len(), ?source, "catalog loaded");

        Self {
            storage,
            products,
            source,
        }
    }

    /// Replace the whole catalog and persist it.
    ///
    /// The in-memory list is replaced even when persisting fails, so the
    /// running shop keeps showing what the admin just saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the new list could not be written to storage.
    #[instrument(skip(self, products), fields(products = products.len()))]
    pub fn save(&mut self, products: Vec<Product>) -> Result<(), StorageError> {
        self.products = products;
        persist(self.storage.as_ref(), &self.products).inspect_err(|e| {
            tracing::warn!(error = %e, "catalog changed in memory but was not persisted");
        })
    }

    /// Replace the catalog with the default product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list could not be written to storage.
    pub fn reset_to_defaults(&mut self) -> Result<(), StorageError> {
        self.save(default_products())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product with `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Returns true if a product with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Where the catalog came from at load time.
    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        self.source
    }
}

fn persist(storage: &dyn LocalStore, products: &[Product]) -> Result<(), StorageError> {
    let json = serde_json::to_string(products)?;
    storage.set(keys::PRODUCTS, &json)
}
