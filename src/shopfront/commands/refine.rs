//! Filter panel and sort dropdown interactions.
//!
//! Each refinement reads the current query, applies one state transition and
//! hands back the next query string. Nothing is stored: the query string is
//! the whole state.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::filters::{
    add_filter, clear_all_filters, is_valid_scalar, parse_filters, remove_filter,
    select_price_range, toggle_filter, with_sort, FilterKey, FilterKind, SortKey,
};
use crate::query::count_active;

#[derive(Debug, Clone, PartialEq)]
pub enum Refinement {
    Toggle(FilterKey, String),
    Add(FilterKey, String),
    Remove(FilterKey, Option<String>),
    Clear,
    Sort(SortKey),
    Price { min: String, max: String },
}

pub fn run(query: &str, refinement: Refinement) -> Result<CmdResult> {
    let state = parse_filters(query);

    let next = match &refinement {
        Refinement::Toggle(key, value) => {
            validate(*key, value)?;
            toggle_filter(&state, *key, value)
        }
        Refinement::Add(key, value) => {
            validate(*key, value)?;
            add_filter(&state, *key, value)
        }
        Refinement::Remove(key, value) => remove_filter(&state, *key, value.as_deref()),
        Refinement::Clear => clear_all_filters(),
        Refinement::Sort(sort) => with_sort(&state, *sort),
        Refinement::Price { min, max } => {
            validate(FilterKey::MinPrice, min)?;
            validate(FilterKey::MaxPrice, max)?;
            select_price_range(&state, min, max)
        }
    };

    let mut result = CmdResult::default();
    if next == state && refinement != Refinement::Clear {
        result.add_message(CmdMessage::info("Filters unchanged"));
    }
    let count = count_active(&next);
    if count > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} filter{} applied",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }
    Ok(result.with_filters(next))
}

/// Reject values the codec would drop on the next parse.
fn validate(key: FilterKey, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ShopError::Api(format!("A value is required for {}", key)));
    }
    if key.kind() == FilterKind::Scalar && !is_valid_scalar(key, value) {
        return Err(ShopError::Api(format!("Invalid value for {}: '{}'", key, value)));
    }
    Ok(())
}
