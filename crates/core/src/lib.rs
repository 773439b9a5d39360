//! El Yosr Core - Shared types and storefront logic.
//!
//! This crate provides the types and pure computations used across all
//! El Yosr components:
//! - `storefront` - Local storefront and admin service
//! - `cli` - Command-line tools for seeding and catalog management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP. Cart arithmetic, filtering, and order message
//! composition can be tested without a server or a browser.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices, plus the
//!   product, cart item, and order records
//! - [`cart`] - In-memory cart with quantity clamping
//! - [`filter`] - Category and search-term filtering of the catalog
//! - [`order`] - `WhatsApp` order message and deep link composition
//! - [`seed`] - Default catalog used when nothing has been persisted

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod order;
pub mod seed;
pub mod types;

pub use cart::Cart;
pub use filter::{filter_products, matches_search};
pub use types::*;
