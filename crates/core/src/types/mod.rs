//! Core types for El Yosr.
//!
//! This module provides type-safe wrappers and records for the catalog,
//! the cart, and checkout.

pub mod category;
pub mod id;
pub mod order_info;
pub mod price;
pub mod product;
pub mod view;

pub use category::{ALL_CATEGORIES, CATEGORIES, CategoryFilter, default_new_product_category};
pub use id::ProductId;
pub use order_info::{OrderInfo, OrderInfoError};
pub use price::{CURRENCY_LABEL, Price};
pub use product::{CartItem, DEFAULT_PRODUCT_IMAGE, Product, ProductDraft};
pub use view::{AppView, Theme};
