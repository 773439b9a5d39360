//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ELYOSR_HOST` - Bind address (default: 127.0.0.1)
//! - `ELYOSR_PORT` - Listen port (default: 3000)
//! - `ELYOSR_DATA_DIR` - Directory holding the persisted catalog and theme (default: ./data)
//! - `ELYOSR_WHATSAPP_PHONE` - Order destination, international format, digits only
//!   (default: 201012345678)
//! - `ELYOSR_ADMIN_PASSWORD` - Admin view password (default: admin)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default order destination.
pub const DEFAULT_WHATSAPP_PHONE: &str = "201012345678";

/// Default admin password.
///
/// The admin gate is a plain comparison, not authentication; changing the
/// value only changes what has to be typed.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory for persisted key/value data
    pub data_dir: PathBuf,
    /// `WhatsApp` number orders are sent to (digits only)
    pub whatsapp_phone: String,
    /// Password for the admin view
    pub admin_password: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("whatsapp_phone", &self.whatsapp_phone)
            .field("admin_password", &"[REDACTED]")
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[SET]"))
            .field("sentry_environment", &self.sentry_environment)
            .finish()
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            data_dir: PathBuf::from("data"),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            admin_password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let host = match get("ELYOSR_HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar("ELYOSR_HOST".to_string(), e.to_string()))?,
            None => defaults.host,
        };
        let port = match get("ELYOSR_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("ELYOSR_PORT".to_string(), e.to_string()))?,
            None => defaults.port,
        };
        let data_dir = get("ELYOSR_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let whatsapp_phone = match get("ELYOSR_WHATSAPP_PHONE") {
            Some(value) => validate_phone(&value, "ELYOSR_WHATSAPP_PHONE")?,
            None => defaults.whatsapp_phone,
        };
        let admin_password = get("ELYOSR_ADMIN_PASSWORD")
            .map_or(defaults.admin_password, SecretString::from);

        Ok(Self {
            host,
            port,
            data_dir,
            whatsapp_phone,
            admin_password,
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns true if the admin password was left at its default.
    #[must_use]
    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

/// Accept an international number as digits, tolerating a leading `+` and
/// spaces, which `wa.me` links do not allow.
fn validate_phone(value: &str, var_name: &str) -> Result<String, ConfigError> {
    let digits: String = value
        .trim_start_matches('+')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be an international phone number (digits only)".to_string(),
        ));
    }
    Ok(digits)
}
