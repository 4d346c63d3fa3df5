use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::Product;
use crate::store::DataStore;
use std::collections::HashSet;
use tracing::info;

const SEED_CATALOG: &str = include_str!("../../../data/seed_products.json");

/// The bundled demo catalog.
pub fn seed_products() -> Result<Vec<Product>> {
    serde_json::from_str(SEED_CATALOG).map_err(ShopError::Serialization)
}

/// Load the demo catalog. Products already in the store are left alone, so
/// seeding twice does not duplicate anything.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let existing: HashSet<_> = store.list_products()?.into_iter().map(|p| p.id).collect();

    let mut added = Vec::new();
    for product in seed_products()? {
        if existing.contains(&product.id) {
            continue;
        }
        store.save_product(&product)?;
        added.push(product);
    }
    info!(added = added.len(), "seeded demo catalog");

    let mut result = CmdResult::default();
    if added.is_empty() {
        result.add_message(CmdMessage::info("Demo catalog already loaded"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Seeded {} products",
            added.len()
        )));
    }
    Ok(result.with_affected_products(added))
}
