//! # Domain Model: Products
//!
//! [`Product`] is the read-only record the storefront browses. Records come
//! from the [`DataStore`](crate::store::DataStore) fully materialized and are
//! never mutated by the filtering or sorting code.
//!
//! ## Effective Price
//!
//! A product may carry a `sale_price`. When present it replaces the regular
//! `price` everywhere a price is compared or charged: price filters, price
//! sorts and cart totals all go through [`Product::effective_price`].
//!
//! ## On-Disk Shape
//!
//! Products serialize with camelCase keys so that JSON exported from the web
//! storefront (`salePrice`, `createdAt`) imports without a mapping step.
//! Records without an `id` or `createdAt` get a fresh one on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    pub gender: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Display label such as "New"; also the `featured` sort priority signal.
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, gender: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            category: String::new(),
            price,
            sale_price: None,
            gender: gender.into(),
            sizes: Vec::new(),
            colors: Vec::new(),
            badge: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_sizes<I, T>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, T>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// The sale price when set, otherwise the regular price.
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Whether the product carries a non-empty badge. `""` counts as none.
    pub fn has_badge(&self) -> bool {
        self.badge.as_deref().is_some_and(|badge| !badge.is_empty())
    }
}
