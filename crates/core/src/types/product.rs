//! Catalog products and cart items.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// Image used for products created without one.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?auto=format&fit=crop&q=80&w=400";

/// A catalog entry.
///
/// Field names match the persisted JSON layout, so catalogs written by
/// earlier versions of the shop load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog, never changed after creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image URL (not validated).
    pub image: String,
    /// Category label, conventionally one of [`super::CATEGORIES`].
    pub category: String,
}

/// Admin input for creating or editing a product.
///
/// A draft without an `id` (or with an empty one) creates a new product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
}

impl ProductDraft {
    /// The identifier of the product being edited, if any.
    #[must_use]
    pub fn existing_id(&self) -> Option<&ProductId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    /// Turn the draft into a newly created product.
    ///
    /// A missing or empty image falls back to [`DEFAULT_PRODUCT_IMAGE`].
    #[must_use]
    pub fn into_new_product(mut self, id: ProductId) -> Product {
        let image = self
            .image
            .take()
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_owned());
        self.build(id, image)
    }

    /// Turn the draft into the replacement for an existing product.
    ///
    /// The product is stored as submitted: an empty image stays empty.
    #[must_use]
    pub fn into_edited_product(mut self, id: ProductId) -> Product {
        let image = self.image.take().unwrap_or_default();
        self.build(id, image)
    }

    fn build(self, id: ProductId, image: String) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image,
            category: self.category,
        }
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            price: product.price,
            image: Some(product.image),
            category: product.category,
        }
    }
}

/// A product selected for purchase.
///
/// The product is copied at add time, so later catalog edits do not change
/// items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Start a new cart line with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Identifier of the underlying product.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(id: Option<&str>, image: Option<&str>) -> ProductDraft {
        ProductDraft {
            id: id.map(ProductId::from),
            name: "X".to_string(),
            price: Price::new(5),
            image: image.map(str::to_owned),
            category: "أخرى".to_string(),
        }
    }

    #[test]
    fn test_empty_draft_id_means_create() {
        assert!(draft(None, None).existing_id().is_none());
        assert!(draft(Some(""), None).existing_id().is_none());
        assert_eq!(
            draft(Some("abc"), None).existing_id(),
            Some(&ProductId::new("abc"))
        );
    }

    #[test]
    fn test_into_product_defaults_image() {
        let product = draft(None, Some("")).into_new_product(ProductId::new("n1"));
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);

        let product = draft(None, Some("https://img/x.png")).into_new_product(ProductId::new("n1"));
        assert_eq!(product.image, "https://img/x.png");
    }

    #[test]
    fn test_edited_product_keeps_image_as_given() {
        let product = draft(Some("a"), Some("")).into_edited_product(ProductId::new("a"));
        assert_eq!(product.image, "");

        let product = draft(Some("a"), None).into_edited_product(ProductId::new("a"));
        assert_eq!(product.image, "");
    }

    #[test]
    fn test_product_json_layout() {
        let json = r#"{"id":"1","name":"milk","price":30,"image":"u","category":"ألبان وأجبان"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Price::new(30));
        assert_eq!(serde_json::to_string(&product).unwrap(), json);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let item = CartItem {
            product: draft(None, None).into_new_product(ProductId::new("a")),
            quantity: 2,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["quantity"], 2);
        assert_eq!(item.line_total(), Price::new(10));
    }
}
