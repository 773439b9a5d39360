//! Display preferences: color theme and the active top-level view.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Color theme, persisted as the literal strings `"dark"` and `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted theme value; anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The persisted representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two top-level views of the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    #[default]
    Customer,
    Admin,
}

impl AppView {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Customer => Self::Admin,
            Self::Admin => Self::Customer,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(AppView::Customer.toggled(), AppView::Admin);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&AppView::Admin).unwrap(), "\"admin\"");
    }
}
