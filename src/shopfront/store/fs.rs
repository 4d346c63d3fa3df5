use super::DataStore;
use crate::cart::Cart;
use crate::error::{Result, ShopError};
use crate::model::Product;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

const PRODUCTS_FILENAME: &str = "products.json";
const CART_FILENAME: &str = "cart.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShopError::Io)?;
        }
        Ok(())
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        let data_file = self.root.join(PRODUCTS_FILENAME);
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(ShopError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        debug!(count = products.len(), path = %data_file.display(), "loaded products");
        Ok(products)
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(products).map_err(ShopError::Serialization)?;
        fs::write(self.root.join(PRODUCTS_FILENAME), content).map_err(ShopError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn list_products(&self) -> Result<Vec<Product>> {
        self.load_products()
    }

    fn get_product(&self, id: &Uuid) -> Result<Product> {
        self.load_products()?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or(ShopError::ProductNotFound(*id))
    }

    fn save_product(&mut self, product: &Product) -> Result<()> {
        let mut products = self.load_products()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        self.save_products(&products)
    }

    fn load_cart(&self) -> Result<Cart> {
        let cart_file = self.root.join(CART_FILENAME);
        if !cart_file.exists() {
            return Ok(Cart::default());
        }
        let content = fs::read_to_string(cart_file).map_err(ShopError::Io)?;
        let cart: Cart = serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(cart)
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(cart).map_err(ShopError::Serialization)?;
        fs::write(self.root.join(CART_FILENAME), content).map_err(ShopError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-yet"));
        assert!(store.list_products().unwrap().is_empty());
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn products_keep_catalog_order() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let names = ["Dunk Low", "Air Force 1", "Blazer Mid"];
        for name in names {
            store.save_product(&Product::new(name, 100.0, "unisex")).unwrap();
        }

        let listed: Vec<String> = store
            .list_products()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn save_replaces_in_place() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let first = Product::new("Dunk Low", 100.0, "unisex");
        store.save_product(&first).unwrap();
        store.save_product(&Product::new("Blazer", 90.0, "men")).unwrap();

        let mut updated = first.clone();
        updated.badge = Some("Sale".to_string());
        store.save_product(&updated).unwrap();

        let products = store.list_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].badge.as_deref(), Some("Sale"));
        assert_eq!(store.get_product(&first.id).unwrap(), updated);
    }

    #[test]
    fn get_missing_product_errors() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get_product(&id),
            Err(ShopError::ProductNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn cart_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let mut cart = Cart::new();
        cart.add_item(&Product::new("Cortez", 90.0, "unisex"));
        store.save_cart(&cart).unwrap();

        assert_eq!(store.load_cart().unwrap(), cart);
    }
}
