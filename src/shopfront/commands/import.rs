use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::Product;
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const IMPORT_EXT: &str = "json";

/// Import products from JSON array files, or from every `.json` file in a
/// directory. Products whose id already exists are replaced.
pub fn run<S: DataStore>(store: &mut S, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported = Vec::new();

    for path in paths {
        if path.is_dir() {
            let entries = fs::read_dir(&path).map_err(ShopError::Io)?;
            for entry in entries {
                let sub_path = entry.map_err(ShopError::Io)?.path();
                let is_json = sub_path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(IMPORT_EXT));
                if sub_path.is_file() && is_json {
                    import_path(store, &sub_path, &mut imported, &mut result);
                }
            }
        } else if path.is_file() {
            import_path(store, &path, &mut imported, &mut result);
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        imported.len()
    )));
    Ok(result.with_affected_products(imported))
}

fn import_path<S: DataStore>(
    store: &mut S,
    path: &Path,
    imported: &mut Vec<Product>,
    result: &mut CmdResult,
) {
    match import_file(store, path) {
        Ok(products) => {
            info!(count = products.len(), path = %path.display(), "imported products");
            result.add_message(CmdMessage::info(format!(
                "Imported {} from {}",
                products.len(),
                path.display()
            )));
            imported.extend(products);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "import failed");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            )));
        }
    }
}

fn import_file<S: DataStore>(store: &mut S, path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path).map_err(ShopError::Io)?;
    let products: Vec<Product> = serde_json::from_str(&content).map_err(ShopError::Serialization)?;
    for product in &products {
        store.save_product(product)?;
    }
    Ok(products)
}
