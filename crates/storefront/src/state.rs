//! Application state shared across handlers.
//!
//! The shop serves one browser session per process, so the cart, the
//! active view, and the admin flag live here rather than in per-client
//! sessions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use elyosr_core::{AppView, Cart, Theme};
use tokio::sync::{Mutex, RwLock};

use crate::config::StorefrontConfig;
use crate::services::CatalogStore;
use crate::services::theme::load_theme;
use crate::storage::{FileStore, LocalStore, StorageError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart, preferences, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: Arc<dyn LocalStore>,
    catalog: RwLock<CatalogStore>,
    cart: Mutex<Cart>,
    theme: Mutex<Theme>,
    view: Mutex<AppView>,
    admin_authenticated: AtomicBool,
}

impl AppState {
    /// Create application state over an existing store.
    ///
    /// Loads (and on first run seeds) the catalog and the theme.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Arc<dyn LocalStore>) -> Self {
        let catalog = CatalogStore::load(Arc::clone(&storage));
        let theme = load_theme(storage.as_ref());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                catalog: RwLock::new(catalog),
                cart: Mutex::new(Cart::new()),
                theme: Mutex::new(theme),
                view: Mutex::new(AppView::default()),
                admin_authenticated: AtomicBool::new(false),
            }),
        }
    }

    /// Create application state backed by the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = FileStore::open(&config.data_dir)?;
        Ok(Self::new(config, Arc::new(storage)))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the key/value store.
    #[must_use]
    pub fn storage(&self) -> &dyn LocalStore {
        self.inner.storage.as_ref()
    }

    /// Get the catalog lock.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<CatalogStore> {
        &self.inner.catalog
    }

    /// Get the cart lock.
    #[must_use]
    pub fn cart(&self) -> &Mutex<Cart> {
        &self.inner.cart
    }

    /// Get the theme lock.
    #[must_use]
    pub fn theme(&self) -> &Mutex<Theme> {
        &self.inner.theme
    }

    /// Get the active view lock.
    #[must_use]
    pub fn view(&self) -> &Mutex<AppView> {
        &self.inner.view
    }

    /// Returns true once the admin password has been entered this session.
    #[must_use]
    pub fn is_admin_authenticated(&self) -> bool {
        self.inner.admin_authenticated.load(Ordering::Acquire)
    }

    /// Mark the session as admin-authenticated. There is no way back.
    pub fn mark_admin_authenticated(&self) {
        self.inner
            .admin_authenticated
            .store(true, Ordering::Release);
    }
}
