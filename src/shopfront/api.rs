//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! storefront operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and normalizes inputs: filter key
//! names become [`FilterKey`]s, sort names become [`SortKey`]s, and names the
//! storefront does not know are rejected here with [`ShopError::Api`]. It never
//! prints and never formats; results come back as [`CmdResult`] values.
//!
//! `ShopApi<S: DataStore>` is generic over storage: `ShopApi<FileStore>` in
//! the binary, `ShopApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::ShopConfig;
use crate::error::{Result, ShopError};
use crate::filters::{FilterKey, SortKey};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct ShopApi<S: DataStore> {
    store: S,
    paths: commands::ShopPaths,
}

impl<S: DataStore> ShopApi<S> {
    pub fn new(store: S, paths: commands::ShopPaths) -> Self {
        Self { store, paths }
    }

    /// List the catalog as the given query string selects it.
    pub fn browse(&self, query: &str) -> Result<commands::CmdResult> {
        let config = ShopConfig::load(&self.paths.data_dir)?;
        commands::browse::run(&self.store, query, config.page_size)
    }

    pub fn toggle_filter(&self, query: &str, key: &str, value: &str) -> Result<commands::CmdResult> {
        let key = parse_key(key)?;
        commands::refine::run(query, Refinement::Toggle(key, value.to_string()))
    }

    pub fn add_filter(&self, query: &str, key: &str, value: &str) -> Result<commands::CmdResult> {
        let key = parse_key(key)?;
        commands::refine::run(query, Refinement::Add(key, value.to_string()))
    }

    pub fn remove_filter(
        &self,
        query: &str,
        key: &str,
        value: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let key = parse_key(key)?;
        commands::refine::run(query, Refinement::Remove(key, value.map(str::to_string)))
    }

    pub fn clear_filters(&self, query: &str) -> Result<commands::CmdResult> {
        commands::refine::run(query, Refinement::Clear)
    }

    pub fn sort(&self, query: &str, sort: &str) -> Result<commands::CmdResult> {
        let sort = SortKey::parse(sort).ok_or_else(|| {
            let known: Vec<&str> = SortKey::ALL.iter().map(|s| s.as_param()).collect();
            ShopError::Api(format!(
                "Unknown sort: {} (expected one of {})",
                sort,
                known.join(", ")
            ))
        })?;
        commands::refine::run(query, Refinement::Sort(sort))
    }

    pub fn price_range(&self, query: &str, min: &str, max: &str) -> Result<commands::CmdResult> {
        commands::refine::run(
            query,
            Refinement::Price {
                min: min.to_string(),
                max: max.to_string(),
            },
        )
    }

    pub fn cart(&self) -> Result<commands::CmdResult> {
        commands::cart::show(&self.store)
    }

    pub fn add_to_cart(&mut self, product: &str) -> Result<commands::CmdResult> {
        commands::cart::add(&mut self.store, product)
    }

    pub fn remove_from_cart(&mut self, product: &str) -> Result<commands::CmdResult> {
        commands::cart::remove(&mut self.store, product)
    }

    pub fn clear_cart(&mut self) -> Result<commands::CmdResult> {
        commands::cart::clear(&mut self.store)
    }

    pub fn import_products(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn seed(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

fn parse_key(name: &str) -> Result<FilterKey> {
    name.parse::<FilterKey>().map_err(ShopError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::refine::Refinement;
pub use commands::{CmdMessage, CmdResult, Listing, MessageLevel, ShopPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::{tempdir, TempDir};

    fn api_with_catalog() -> (ShopApi<InMemoryStore>, TempDir) {
        let dir = tempdir().unwrap();
        let fixture = StoreFixture::new().with_sample_catalog();
        let paths = ShopPaths {
            data_dir: dir.path().to_path_buf(),
        };
        (ShopApi::new(fixture.store, paths), dir)
    }

    #[test]
    fn browse_uses_configured_page_size() {
        let (api, _dir) = api_with_catalog();
        api.config(ConfigAction::Set("page-size".into(), "3".into()))
            .unwrap();

        let result = api.browse("").unwrap();
        assert_eq!(result.listed_products.len(), 3);
        assert_eq!(result.listing.unwrap().total_pages, 2);
    }

    #[test]
    fn refine_dispatches_by_key_name() {
        let (api, _dir) = api_with_catalog();
        let result = api.toggle_filter("size=9", "color", "red").unwrap();
        assert_eq!(result.query(), Some("size=9&color=red"));

        let result = api.remove_filter("size=9&color=red", "size", None).unwrap();
        assert_eq!(result.query(), Some("color=red"));

        let result = api.price_range("", "100", "150").unwrap();
        assert_eq!(result.query(), Some("minPrice=100&maxPrice=150"));
    }

    #[test]
    fn unknown_names_are_api_errors() {
        let (api, _dir) = api_with_catalog();
        assert!(matches!(
            api.toggle_filter("", "brand", "nike"),
            Err(ShopError::Api(_))
        ));
        assert!(matches!(api.sort("", "popularity"), Err(ShopError::Api(_))));
    }

    #[test]
    fn sort_resets_page() {
        let (api, _dir) = api_with_catalog();
        let result = api.sort("page=2", "price_desc").unwrap();
        assert_eq!(result.query(), Some("sort=price_desc&page=1"));
    }

    #[test]
    fn cart_operations_dispatch() {
        let (mut api, _dir) = api_with_catalog();
        api.add_to_cart("LeBron 21").unwrap();
        assert_eq!(api.cart().unwrap().cart.unwrap().item_count(), 1);
        api.clear_cart().unwrap();
        assert!(api.cart().unwrap().cart.unwrap().is_empty());
    }
}
