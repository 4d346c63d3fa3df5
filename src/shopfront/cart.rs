//! Shopping cart.
//!
//! A cart line snapshots the product's name and effective price at the moment
//! it was added, so later catalog edits do not reprice what is already in the
//! cart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`. An existing line is incremented.
    pub fn add_item(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.effective_price(),
                quantity: 1,
            }),
        }
    }

    /// Drop the line for `product_id`. Returns the removed line, if any.
    pub fn remove_item(&mut self, product_id: &Uuid) -> Option<CartItem> {
        let position = self.items.iter().position(|i| &i.product_id == product_id)?;
        Some(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
