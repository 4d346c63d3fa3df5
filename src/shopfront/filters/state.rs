//! Pure transitions on [`FilterState`].
//!
//! Every function takes the current state by reference and returns the next
//! one; the input is never modified. List keys (gender, size, color) follow
//! set-membership rules, scalar keys (minPrice, maxPrice, sort, page) are
//! always overwritten or deleted as a whole.

use super::key::{FilterKey, FilterKind, SortKey};
use super::value::{FilterState, FilterValue};

/// Add `value` under `key`.
///
/// For list keys an absent key becomes a scalar, a different scalar is
/// promoted to a two-element list, and a value already present is a no-op.
/// Scalar keys are overwritten. An empty `value` changes nothing.
pub fn add_filter(state: &FilterState, key: FilterKey, value: &str) -> FilterState {
    if value.is_empty() {
        return state.clone();
    }

    let next = match (key.kind(), state.get(key)) {
        (FilterKind::Scalar, _) | (FilterKind::List, None) => {
            FilterValue::Single(value.to_string())
        }
        (FilterKind::List, Some(current)) if current.contains(value) => return state.clone(),
        (FilterKind::List, Some(FilterValue::Single(current))) => {
            FilterValue::Multi(vec![current.clone(), value.to_string()])
        }
        (FilterKind::List, Some(FilterValue::Multi(values))) => {
            let mut values = values.clone();
            values.push(value.to_string());
            FilterValue::Multi(values)
        }
    };
    state.clone().insert(key, next)
}

/// Remove `value` from `key`, or the whole key when `value` is `None`.
///
/// Removing the last member of a list deletes the key; a list is never left
/// empty. `sort` and `page` are deleted only when they hold `value`; the
/// price bounds are always deleted whole, whatever `value` says.
pub fn remove_filter(state: &FilterState, key: FilterKey, value: Option<&str>) -> FilterState {
    let value = match (key, value) {
        (FilterKey::MinPrice | FilterKey::MaxPrice, _) | (_, None) => {
            return state.clone().without(key)
        }
        (_, Some(value)) if value.is_empty() => return state.clone().without(key),
        (_, Some(value)) => value,
    };

    match state.get(key) {
        Some(FilterValue::Multi(values)) => {
            let remaining: Vec<String> = values.iter().filter(|v| *v != value).cloned().collect();
            if remaining.is_empty() {
                state.clone().without(key)
            } else {
                state.clone().insert(key, FilterValue::Multi(remaining))
            }
        }
        Some(FilterValue::Single(current)) if current == value => state.clone().without(key),
        _ => state.clone(),
    }
}

/// Remove `value` if it is selected, add it otherwise.
///
/// This is what interactive filter controls call.
pub fn toggle_filter(state: &FilterState, key: FilterKey, value: &str) -> FilterState {
    if is_filter_active(state, key, value) {
        remove_filter(state, key, Some(value))
    } else {
        add_filter(state, key, value)
    }
}

/// The empty state: no filters, default sort, first page.
pub fn clear_all_filters() -> FilterState {
    FilterState::new()
}

/// Whether `value` is currently selected under `key`.
pub fn is_filter_active(state: &FilterState, key: FilterKey, value: &str) -> bool {
    state.get(key).is_some_and(|current| current.contains(value))
}

/// Select a price range, setting both bounds together.
pub fn select_price_range(state: &FilterState, min: &str, max: &str) -> FilterState {
    let next = add_filter(state, FilterKey::MinPrice, min);
    add_filter(&next, FilterKey::MaxPrice, max)
}

/// Change the ordering. The listing restarts from page 1.
pub fn with_sort(state: &FilterState, sort: SortKey) -> FilterState {
    let next = add_filter(state, FilterKey::Sort, sort.as_param());
    add_filter(&next, FilterKey::Page, "1")
}
