//! Default catalog.
//!
//! Used the first time the shop starts with empty storage, and by
//! `elyosr seed` to reset a catalog.

use crate::types::{Price, Product, ProductId};

/// `(id, name, price, category, image)` rows of the default catalog.
const SEED_ROWS: &[(&str, &str, u64, &str, &str)] = &[
    (
        "1",
        "شيبسي بالجبنة",
        10,
        "تسالي",
        "https://images.unsplash.com/photo-1566478989037-eec170784d0b?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "2",
        "لبن كامل الدسم 1 لتر",
        38,
        "ألبان وأجبان",
        "https://images.unsplash.com/photo-1563636619-e9143da7973b?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "3",
        "جبنة رومي 250 جم",
        75,
        "ألبان وأجبان",
        "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "4",
        "فراخ بانيه 1 كجم",
        210,
        "لحوم ودواجن",
        "https://images.unsplash.com/photo-1604503468506-a8da13d82791?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "5",
        "عيش فينو 5 قطع",
        15,
        "مخبوزات",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "6",
        "مسحوق غسيل 2 كجم",
        120,
        "منظفات",
        "https://images.unsplash.com/photo-1583947215259-38e31be8751f?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "7",
        "زيت عباد الشمس 1 لتر",
        85,
        "أخرى",
        "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?auto=format&fit=crop&q=80&w=400",
    ),
    (
        "8",
        "بسكويت بالشوكولاتة",
        12,
        "تسالي",
        "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?auto=format&fit=crop&q=80&w=400",
    ),
];

/// The default product list, in display order.
#[must_use]
pub fn default_products() -> Vec<Product> {
    SEED_ROWS
        .iter()
        .map(|&(id, name, price, category, image)| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::new(price),
            image: image.to_owned(),
            category: category.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::types::{ALL_CATEGORIES, CATEGORIES};

    #[test]
    fn test_seed_ids_unique() {
        let products = default_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_uses_known_categories() {
        for product in default_products() {
            assert!(CATEGORIES.contains(&product.category.as_str()));
            assert_ne!(product.category, ALL_CATEGORIES);
            assert!(!product.name.is_empty());
        }
    }
}
