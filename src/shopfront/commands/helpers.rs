use crate::error::{Result, ShopError};
use crate::model::Product;
use crate::store::DataStore;
use uuid::Uuid;

/// Shortest id prefix accepted when selecting a product.
pub const MIN_ID_PREFIX: usize = 4;

/// Find the product a user means by `selector`.
///
/// Accepted, in order: a full UUID, a unique id prefix of at least
/// [`MIN_ID_PREFIX`] characters, or a product name (case-insensitive).
pub fn resolve_product<S: DataStore>(store: &S, selector: &str) -> Result<Product> {
    let selector = selector.trim();
    if let Ok(id) = Uuid::parse_str(selector) {
        return store.get_product(&id);
    }

    let products = store.list_products()?;

    if selector.len() >= MIN_ID_PREFIX {
        let prefix = selector.to_lowercase();
        let mut by_prefix = products
            .iter()
            .filter(|p| p.id.to_string().starts_with(&prefix));
        if let Some(first) = by_prefix.next() {
            if by_prefix.next().is_some() {
                return Err(ShopError::Api(format!(
                    "Id prefix '{}' matches more than one product",
                    selector
                )));
            }
            return Ok(first.clone());
        }
    }

    products
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| ShopError::Api(format!("No product matches '{}'", selector)))
}
