//! In-memory shopping cart.
//!
//! The cart owns copies of the products it holds. Lines keep insertion
//! order, a product appears at most once, and quantities never drop below 1:
//! removing a line is always an explicit [`Cart::remove`].

use serde::{Deserialize, Serialize};

use crate::types::{CartItem, Price, Product, ProductId};

/// The customer's in-progress selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the same product id, otherwise
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.find_mut(&product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(product.clone())),
        }
    }

    /// Remove the line for `id`. Does nothing if there is none.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Change the quantity of the line for `id` by `delta`.
    ///
    /// The result is clamped to a minimum of 1 and saturates at `u32::MAX`.
    /// Does nothing if there is no such line.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) {
        if let Some(item) = self.find_mut(id) {
            let next = i64::from(item.quantity).saturating_add(delta).max(1);
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}
