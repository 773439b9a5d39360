//! Product identifiers.
//!
//! Catalog entries are keyed by an opaque string. Entries loaded from storage
//! keep whatever identifier they were saved with; entries created by the admin
//! editor get a short random base-36 identifier.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Opaque, immutable identifier of a catalog product.
///
/// ## Examples
///
/// ```
/// use elyosr_core::ProductId;
///
/// let id = ProductId::new("p-1");
/// assert_eq!(id.as_str(), "p-1");
///
/// let generated = ProductId::generate();
/// assert_eq!(generated.as_str().len(), ProductId::GENERATED_LEN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Length of identifiers produced by [`ProductId::generate`].
    pub const GENERATED_LEN: usize = 9;

    /// Radix of generated identifiers (`0-9a-z`).
    const RADIX: u32 = 36;

    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random identifier using the thread-local RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate a random identifier from the given RNG.
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::GENERATED_LEN)
            .map(|_| char::from_digit(rng.random_range(0..Self::RADIX), Self::RADIX).unwrap_or('0'))
            .collect();
        Self(id)
    }

    /// Generate a random identifier for which `taken` returns false.
    ///
    /// Collisions are astronomically unlikely at catalog sizes, so this
    /// almost always returns on the first draw.
    #[must_use]
    pub fn generate_unique(taken: impl Fn(&Self) -> bool) -> Self {
        let mut rng = rand::rng();
        loop {
            let id = Self::generate_with(&mut rng);
            if !taken(&id) {
                return id;
            }
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
