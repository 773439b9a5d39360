//! Product categories and the storefront category filter.

use serde::{Deserialize, Serialize};

/// Label of the sentinel "all categories" entry.
pub const ALL_CATEGORIES: &str = "الكل";

/// Category labels shown in the storefront, sentinel first.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "تسالي",
    "ألبان وأجبان",
    "لحوم ودواجن",
    "مخبوزات",
    "منظفات",
    "أخرى",
];

/// Category selection applied to the storefront listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product passes.
    #[default]
    All,
    /// Only products whose category equals this label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parse a selected category label.
    ///
    /// The sentinel label, the ASCII alias `all`, and the empty string all
    /// select every category.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES || label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(label.to_owned())
        }
    }

    /// Returns true if a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// The label shown for this selection.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(selected) => selected,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_owned()
    }
}

/// The default category offered when creating a new product.
#[must_use]
pub fn default_new_product_category() -> &'static str {
    CATEGORIES.get(1).copied().unwrap_or(ALL_CATEGORIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(CategoryFilter::parse(ALL_CATEGORIES), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("مخبوزات"),
            CategoryFilter::Only("مخبوزات".to_string())
        );
    }

    #[test]
    fn test_matches_exact() {
        let filter = CategoryFilter::parse("منظفات");
        assert!(filter.matches("منظفات"));
        assert!(!filter.matches("منظفات "));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_default_new_product_category() {
        assert_eq!(default_new_product_category(), "تسالي");
    }
}
