use crate::commands::helpers::resolve_product;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub fn show<S: DataStore>(store: &S) -> Result<CmdResult> {
    let cart = store.load_cart()?;
    Ok(CmdResult::default().with_cart(cart))
}

pub fn add<S: DataStore>(store: &mut S, selector: &str) -> Result<CmdResult> {
    let product = resolve_product(store, selector)?;
    let mut cart = store.load_cart()?;
    cart.add_item(&product);
    store.save_cart(&cart)?;
    info!(product = %product.id, items = cart.item_count(), "added to cart");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added to cart: {}", product.name)));
    Ok(result.with_affected_products(vec![product]).with_cart(cart))
}

pub fn remove<S: DataStore>(store: &mut S, selector: &str) -> Result<CmdResult> {
    let product = resolve_product(store, selector)?;
    let mut cart = store.load_cart()?;

    let mut result = CmdResult::default();
    match cart.remove_item(&product.id) {
        Some(item) => {
            store.save_cart(&cart)?;
            info!(product = %product.id, "removed from cart");
            result.add_message(CmdMessage::success(format!(
                "Removed from cart: {}",
                item.name
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Not in cart: {}",
                product.name
            )));
        }
    }
    Ok(result.with_affected_products(vec![product]).with_cart(cart))
}

pub fn clear<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut cart = store.load_cart()?;
    cart.clear();
    store.save_cart(&cart)?;
    info!("cart cleared");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Cart cleared"));
    Ok(result.with_cart(cart))
}
