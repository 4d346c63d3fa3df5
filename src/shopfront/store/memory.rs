use super::DataStore;
use crate::cart::Cart;
use crate::error::{Result, ShopError};
use crate::model::Product;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    cart: Cart,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn get_product(&self, id: &Uuid) -> Result<Product> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(ShopError::ProductNotFound(*id))
    }

    fn save_product(&mut self, product: &Product) -> Result<()> {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => self.products.push(product.clone()),
        }
        Ok(())
    }

    fn load_cart(&self) -> Result<Cart> {
        Ok(self.cart.clone())
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<()> {
        self.cart = cart.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.store.save_product(&product).unwrap();
            self
        }

        /// `count` plain unisex products priced 10, 20, 30...
        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let price = (i as f64 + 1.0) * 10.0;
                let product = Product::new(format!("Test Shoe {}", i + 1), price, "unisex");
                self.store.save_product(&product).unwrap();
            }
            self
        }

        /// A small catalog covering every filter category.
        pub fn with_sample_catalog(self) -> Self {
            self.with_product(
                Product::new("Air Max 90", 130.0, "men")
                    .with_category("Lifestyle")
                    .with_sizes(["US 9", "US 10", "US 11"])
                    .with_colors(["white", "black"])
                    .with_badge("New"),
            )
            .with_product(
                Product::new("Pegasus 40", 140.0, "women")
                    .with_sale_price(99.99)
                    .with_category("Running")
                    .with_sizes(["US 7", "US 8"])
                    .with_colors(["pink", "white"]),
            )
            .with_product(
                Product::new("LeBron 21", 200.0, "men")
                    .with_category("Basketball")
                    .with_sizes(["US 10", "US 11", "US 12"])
                    .with_colors(["red", "black"])
                    .with_badge("Popular"),
            )
            .with_product(
                Product::new("Flex Runner", 45.0, "kids")
                    .with_category("Running")
                    .with_sizes(["US 6"])
                    .with_colors(["blue", "red"]),
            )
        }
    }
}
