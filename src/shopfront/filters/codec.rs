//! Query-string encoding of [`FilterState`].
//!
//! Multi-valued parameters are comma-joined inside a single pair
//! (`color=red,blue`). Each value is percent-encoded on its own before
//! joining, so a literal comma inside a value travels as `%2C` and is not
//! mistaken for a separator.
//!
//! Parsing is lossy in one documented way: `Single("9")` and `Multi(["9"])`
//! both encode to `size=9`, and `size=9` parses back as `Single`. The two are
//! equal under [`FilterValue`]'s set equality, so `parse(stringify(s)) == s`.

use std::borrow::Cow;

use tracing::debug;

use super::key::{FilterKey, FilterKind};
use super::value::{FilterState, FilterValue};

/// Decode a query string into a [`FilterState`].
///
/// Never fails. Unrecognized keys, pairs without `=`, undecodable text and
/// malformed scalar values are dropped, leaving the corresponding filter
/// absent.
pub fn parse_filters(query: &str) -> FilterState {
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut state = FilterState::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let Some((raw_key, raw_value)) = pair.split_once('=') else {
            debug!(pair, "ignoring query pair without a value");
            continue;
        };
        let Some(name) = decode_component(raw_key) else {
            continue;
        };
        let Some(key) = FilterKey::from_name(&name) else {
            debug!(key = %name, "ignoring unrecognized query key");
            continue;
        };

        state = match key.kind() {
            FilterKind::List => merge_list(state, key, raw_value),
            FilterKind::Scalar => match decode_component(raw_value) {
                Some(value) if is_valid_scalar(key, &value) => {
                    state.insert(key, FilterValue::Single(value))
                }
                _ => {
                    debug!(key = %key, value = raw_value, "ignoring malformed query value");
                    state
                }
            },
        };
    }
    state
}

/// Encode a [`FilterState`] as a query string (without a leading `?`).
///
/// Keys come out in [`FilterKey`] order. Empty values are omitted, and a
/// state with nothing to encode yields an empty string.
pub fn stringify_filters(state: &FilterState) -> String {
    state
        .iter()
        .filter_map(|(key, value)| {
            let encoded: Vec<Cow<'_, str>> = value
                .as_slice()
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| urlencoding::encode(v))
                .collect();
            if encoded.is_empty() {
                None
            } else {
                Some(format!("{}={}", key.name(), encoded.join(",")))
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn merge_list(state: FilterState, key: FilterKey, raw_value: &str) -> FilterState {
    let parts: Vec<String> = raw_value
        .split(',')
        .filter_map(decode_component)
        .filter(|part| !part.is_empty())
        .collect();
    let comma_joined = raw_value.contains(',');

    let merged = match state.get(key) {
        // Repeated key: accumulate into one list
        Some(existing) => {
            let mut values = existing.clone().into_values();
            values.extend(parts);
            FilterValue::from_parts(values, true)
        }
        None => FilterValue::from_parts(parts, comma_joined),
    };

    match merged {
        Some(value) => state.insert(key, value),
        None => state,
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

/// Whether `value` is acceptable for the scalar `key`.
pub(crate) fn is_valid_scalar(key: FilterKey, value: &str) -> bool {
    match key {
        FilterKey::MinPrice | FilterKey::MaxPrice => is_decimal(value),
        FilterKey::Page => value.parse::<u32>().is_ok_and(|page| page > 0),
        _ => !value.is_empty(),
    }
}

/// Non-negative decimal without sign or exponent: `100`, `49.99`, `.5`.
fn is_decimal(value: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
