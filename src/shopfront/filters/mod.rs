//! # Filter State and URL Synchronization
//!
//! The storefront keeps exactly one source of truth for what the shopper is
//! looking at: the query string. Every render parses it into a
//! [`FilterState`], every interaction computes a new state and serializes it
//! back. Nothing holds a second, drifting copy.
//!
//! ```text
//!  query string ──parse_filters──▶ FilterState ──query::apply──▶ products
//!        ▲                             │
//!        └──────stringify_filters──────┴── toggle_filter / add / remove
//! ```
//!
//! ## Value Shapes
//!
//! | Key | Kind | Example |
//! |-----|------|---------|
//! | `gender` | List | `gender=men,kids` |
//! | `size` | List | `size=US%209` |
//! | `color` | List | `color=red,blue` |
//! | `minPrice` / `maxPrice` | Scalar | `minPrice=50&maxPrice=100` |
//! | `sort` | Scalar | `sort=price_asc` |
//! | `page` | Scalar | `page=2` |
//!
//! A list key holds [`FilterValue::Single`] or [`FilterValue::Multi`]; the
//! distinction is an encoding detail and does not survive a round trip.
//!
//! ## Usage
//!
//! ```
//! use shopfront::filters::{parse_filters, stringify_filters, toggle_filter, FilterKey};
//!
//! let state = parse_filters("color=red,blue&size=9");
//! let state = toggle_filter(&state, FilterKey::Color, "red");
//! assert_eq!(stringify_filters(&state), "size=9&color=blue");
//! ```

mod codec;
mod key;
mod state;
mod value;

pub(crate) use codec::is_valid_scalar;
pub use codec::{parse_filters, stringify_filters};
pub use key::{FilterKey, FilterKeySpec, FilterKind, SortKey, FILTER_KEYS};
pub use state::{
    add_filter, clear_all_filters, is_filter_active, remove_filter, select_price_range,
    toggle_filter, with_sort,
};
pub use value::{FilterState, FilterValue};
