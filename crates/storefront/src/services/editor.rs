//! Admin catalog editor.
//!
//! CRUD over the [`CatalogStore`] behind a password gate. The gate is a
//! plain string comparison against a configured value: it keeps customers
//! from wandering into the editor, it is NOT a security boundary (no
//! hashing, no rate limiting, no expiry). Anyone who can reach the service
//! can read the configuration.

use elyosr_core::filter::matches_search;
use elyosr_core::{Product, ProductDraft, ProductId};
use rust_decimal::{Decimal, RoundingStrategy};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use super::catalog::CatalogStore;
use crate::storage::StorageError;

/// Alert shown when the admin password does not match.
pub const WRONG_PASSWORD_ALERT: &str = "عذراً، كلمة المرور غير صحيحة";

/// Errors from editor operations that were not applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The product name is empty.
    #[error("product name is required")]
    EmptyName,

    /// A destructive action was requested without confirmation.
    #[error("deleting product {0} requires confirmation")]
    NotConfirmed(ProductId),
}

/// Result of an applied edit.
///
/// The catalog change always takes effect in memory; `persist_error` holds
/// the storage failure, if writing it through failed.
#[derive(Debug)]
pub struct Applied<T> {
    pub outcome: T,
    pub persist_error: Option<StorageError>,
}

impl<T> Applied<T> {
    fn from_save(outcome: T, saved: Result<(), StorageError>) -> Self {
        Self {
            outcome,
            persist_error: saved.err(),
        }
    }

    /// Returns true if the change reached storage.
    #[must_use]
    pub const fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// What [`create_or_update`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum EditOutcome {
    /// A new product was appended with this id.
    Created(ProductId),
    /// The product with this id was replaced.
    Updated(ProductId),
    /// The draft named an id that is not in the catalog; nothing changed.
    Unknown(ProductId),
}

/// Summary figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub product_count: usize,
    /// Mean unit price, rounded to one decimal place.
    pub average_price: Decimal,
}

/// Check `input` against the configured admin password.
///
/// Cosmetic gate only; see the module docs.
#[must_use]
pub fn authenticate(input: &str, password: &SecretString) -> bool {
    input == password.expose_secret()
}

/// Save a product draft.
///
/// A draft carrying an id replaces the matching entry in place, exactly as
/// submitted. A draft without one gets a fresh id that is not already in
/// the catalog, a default image if none was given, and is appended.
///
/// # Errors
///
/// Returns [`EditorError::EmptyName`] without touching the catalog if the
/// draft has no name.
#[instrument(skip(catalog, draft), fields(id = ?draft.existing_id()))]
pub fn create_or_update(
    catalog: &mut CatalogStore,
    draft: ProductDraft,
) -> Result<Applied<EditOutcome>, EditorError> {
    if draft.name.is_empty() {
        return Err(EditorError::EmptyName);
    }

    let mut products = catalog.products().to_vec();

    let outcome = if let Some(id) = draft.existing_id().cloned() {
        match products.iter_mut().find(|product| product.id == id) {
            Some(slot) => {
                *slot = draft.into_edited_product(id.clone());
                EditOutcome::Updated(id)
            }
            None => {
                tracing::warn!(%id, "edit for unknown product ignored");
                EditOutcome::Unknown(id)
            }
        }
    } else {
        let id = ProductId::generate_unique(|candidate| catalog.contains(candidate));
        products.push(draft.into_new_product(id.clone()));
        EditOutcome::Created(id)
    };

    tracing::info!(?outcome, "product saved");
    Ok(Applied::from_save(outcome, catalog.save(products)))
}

/// Delete the product with `id` once the admin has confirmed.
///
/// Returns whether a product was actually removed.
///
/// # Errors
///
/// Returns [`EditorError::NotConfirmed`] without touching the catalog if
/// `confirmed` is false.
#[instrument(skip(catalog))]
pub fn delete(
    catalog: &mut CatalogStore,
    id: &ProductId,
    confirmed: bool,
) -> Result<Applied<bool>, EditorError> {
    if !confirmed {
        return Err(EditorError::NotConfirmed(id.clone()));
    }

    let products: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|product| &product.id != id)
        .cloned()
        .collect();
    let removed = products.len() < catalog.len();

    tracing::info!(removed, "product deleted");
    Ok(Applied::from_save(removed, catalog.save(products)))
}

/// Products whose name contains `term`, ignoring case.
#[must_use]
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches_search(&product.name, term))
        .collect()
}

/// Product count and average price.
#[must_use]
pub fn stats(products: &[Product]) -> CatalogStats {
    let average_price = if products.is_empty() {
        Decimal::ZERO
    } else {
        let total: Decimal = products
            .iter()
            .map(|product| Decimal::from(product.price.amount()))
            .sum();
        let mut average = (total / Decimal::from(products.len()))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        average.rescale(1);
        average
    };

    CatalogStats {
        product_count: products.len(),
        average_price,
    }
}
