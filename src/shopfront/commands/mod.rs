use crate::cart::Cart;
use crate::catalog::FilterBadge;
use crate::config::ShopConfig;
use crate::filters::{FilterState, SortKey};
use crate::model::Product;
use std::path::PathBuf;

pub mod browse;
pub mod cart;
pub mod config;
pub mod helpers;
pub mod import;
pub mod refine;
pub mod seed;

#[derive(Debug, Clone)]
pub struct ShopPaths {
    /// Directory holding the catalog, cart and config.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a product listing shows besides the products themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub page: u32,
    pub total_pages: u32,
    /// Matches across all pages.
    pub total_items: usize,
    /// Size of the catalog before filtering.
    pub catalog_size: usize,
    pub active_filters: usize,
    pub badges: Vec<FilterBadge>,
    pub sort: SortKey,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub listing: Option<Listing>,
    /// Filter state after the command, with its query string.
    pub filters: Option<(FilterState, String)>,
    pub cart: Option<Cart>,
    pub config: Option<ShopConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_filters(mut self, state: FilterState) -> Self {
        let query = crate::filters::stringify_filters(&state);
        self.filters = Some((state, query));
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_config(mut self, config: ShopConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The query string produced by a refine command.
    pub fn query(&self) -> Option<&str> {
        self.filters.as_ref().map(|(_, query)| query.as_str())
    }
}
