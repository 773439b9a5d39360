//! Storefront listing filters.
//!
//! The visible listing is recomputed from the full catalog on every request:
//! a category predicate and a case-insensitive name search, both of which
//! must pass. Catalog order is preserved.

use crate::types::{CategoryFilter, Product};

/// Returns true if `name` contains `term`, ignoring case.
///
/// An empty term matches every name.
#[must_use]
pub fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Products passing both the category and the search predicate.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| category.matches(&product.category) && matches_search(&product.name, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, ProductId};

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(1),
            image: String::new(),
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "milk bottle", "ألبان وأجبان"),
            product("2", "Chips", "تسالي"),
            product("3", "Cheese", "ألبان وأجبان"),
            product("4", "Soap", "منظفات"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_all_and_empty_search_returns_everything_in_order() {
        let products = catalog();
        let result = filter_products(&products, &CategoryFilter::All, "");
        assert_eq!(ids(&result), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        let result = filter_products(&products, &CategoryFilter::All, "MILK");
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn test_category_exact_match() {
        let products = catalog();
        let result = filter_products(&products, &CategoryFilter::parse("ألبان وأجبان"), "");
        assert_eq!(ids(&result), ["1", "3"]);
    }

    #[test]
    fn test_both_predicates_apply() {
        let products = catalog();
        let result = filter_products(&products, &CategoryFilter::parse("ألبان وأجبان"), "chee");
        assert_eq!(ids(&result), ["3"]);

        let result = filter_products(&products, &CategoryFilter::parse("تسالي"), "soap");
        assert!(result.is_empty());
    }

    #[test]
    fn test_arabic_substring() {
        let products = vec![product("1", "جبنة رومي", "ألبان وأجبان")];
        assert_eq!(filter_products(&products, &CategoryFilter::All, "رومي").len(), 1);
    }
}
