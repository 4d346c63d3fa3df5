//! # Storage Layer
//!
//! The query engine works on a fully materialized product list. Where that
//! list comes from is behind the [`DataStore`] trait, so commands can run
//! against the filesystem in production and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in a data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── products.json   # Catalog (JSON array, order preserved)
//! ├── cart.json       # Current cart
//! └── config.json     # ShopConfig
//! ```
//!
//! Missing files read as an empty catalog and an empty cart.

use crate::cart::Cart;
use crate::error::Result;
use crate::model::Product;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog and cart storage.
pub trait DataStore {
    /// All products, in catalog order
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Get a product by ID
    fn get_product(&self, id: &Uuid) -> Result<Product>;

    /// Save a product. An existing product with the same ID is replaced in place.
    fn save_product(&mut self, product: &Product) -> Result<()>;

    fn load_cart(&self) -> Result<Cart>;

    fn save_cart(&mut self, cart: &Cart) -> Result<()>;
}
