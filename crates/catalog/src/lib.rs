//! `sarisim-catalog` — product records and the built-in store catalog.

pub mod builtin;
pub mod product;

pub use product::{Barcode, Brand, Category, Product};

/// Store identity stamped on store-initiated promos and run banners.
pub const STORE_NAME: &str = "Sampaguita Minimart";
