//! CLI command implementations.
//!
//! # Environment Variables
//!
//! - `ELYOSR_DATA_DIR` - Directory holding the stored catalog and theme
//! - `ELYOSR_WHATSAPP_PHONE` - Destination number for order links
//! - `ELYOSR_ADMIN_PASSWORD` - Password for catalog edits

pub mod order;
pub mod products;
pub mod seed;
pub mod theme;

use std::str::FromStr;
use std::sync::Arc;

use elyosr_core::{OrderInfoError, ProductId};
use elyosr_storefront::config::{ConfigError, StorefrontConfig};
use elyosr_storefront::services::{CatalogStore, EditorError};
use elyosr_storefront::services::editor::WRONG_PASSWORD_ALERT;
use elyosr_storefront::storage::{FileStore, LocalStore, StorageError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The data directory could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The editor rejected the change.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Required order details are missing.
    #[error(transparent)]
    InvalidOrder(#[from] OrderInfoError),

    /// The admin password did not match.
    #[error("{WRONG_PASSWORD_ALERT}")]
    WrongPassword,

    /// An id that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Shared handles for a command run.
pub struct Context {
    pub config: StorefrontConfig,
    pub storage: Arc<dyn LocalStore>,
}

impl Context {
    /// Load configuration and open the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the data directory
    /// cannot be created.
    pub fn from_env() -> Result<Self, CliError> {
        let config = StorefrontConfig::from_env()?;
        let storage = FileStore::open(&config.data_dir)?;
        Ok(Self::new(config, Arc::new(storage)))
    }

    pub fn new(config: StorefrontConfig, storage: Arc<dyn LocalStore>) -> Self {
        Self { config, storage }
    }

    /// Load the catalog, seeding storage if it is empty.
    pub fn catalog(&self) -> CatalogStore {
        CatalogStore::load(Arc::clone(&self.storage))
    }

    fn authenticate(&self, password: &str) -> Result<(), CliError> {
        if elyosr_storefront::services::editor::authenticate(password, &self.config.admin_password)
        {
            Ok(())
        } else {
            Err(CliError::WrongPassword)
        }
    }
}

/// A product and quantity given on the command line as `ID[:QTY]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: ProductId,
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.rsplit_once(':') {
            Some((id, qty)) => {
                let quantity: u32 = qty
                    .parse()
                    .map_err(|_| format!("invalid quantity '{qty}'"))?;
                (id, quantity)
            }
            None => (s, 1),
        };

        if id.is_empty() {
            return Err("missing product id".to_owned());
        }
        if quantity == 0 {
            return Err("quantity must be at least 1".to_owned());
        }

        Ok(Self {
            id: ProductId::from(id),
            quantity,
        })
    }
}
