//! Property tests for the filter codec, state transitions and query engine.
//!
//! 1. `parse(stringify(s)) == s` for every well-formed state.
//! 2. Toggling the same value twice restores the state.
//! 3. Removal never leaves an empty value behind.
//! 4. Adding a filter category never grows the result.
//! 5. Featured ordering is stable and puts badged products first.

use proptest::prelude::*;
use shopfront::filters::{
    add_filter, parse_filters, remove_filter, stringify_filters, toggle_filter, FilterKey,
    FilterState, FilterValue, SortKey,
};
use shopfront::model::Product;
use shopfront::query::{filter_products, sort_products};

const LIST_KEYS: [FilterKey; 3] = [FilterKey::Gender, FilterKey::Size, FilterKey::Color];
const SCALAR_KEYS: [FilterKey; 4] = [
    FilterKey::MinPrice,
    FilterKey::MaxPrice,
    FilterKey::Sort,
    FilterKey::Page,
];
const GENDERS: [&str; 4] = ["men", "women", "kids", "unisex"];
const SIZES: [&str; 5] = ["US 7", "US 8", "US 9", "US 10", "US 11"];
const COLORS: [&str; 5] = ["black", "white", "red", "blue", "light grey"];

// ── Strategies ──────────────────────────────────────────────────────────

/// Free text including characters that need escaping in a query string.
fn value_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,%+&=?é]{1,6}"
}

fn list_value() -> impl Strategy<Value = FilterValue> {
    prop_oneof![
        value_text().prop_map(FilterValue::Single),
        prop::collection::vec(value_text(), 1..4).prop_map(FilterValue::Multi),
    ]
}

fn decimal() -> impl Strategy<Value = String> {
    "[0-9]{1,4}(\\.[0-9]{1,2})?"
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        proptest::option::of(list_value()),
        proptest::option::of(list_value()),
        proptest::option::of(list_value()),
        proptest::option::of(decimal()),
        proptest::option::of(decimal()),
        proptest::option::of("[a-z_]{1,10}"),
        proptest::option::of(1u32..10_000),
    )
        .prop_map(|(gender, size, color, min, max, sort, page)| {
            let mut state = FilterState::new();
            for (key, value) in LIST_KEYS.into_iter().zip([gender, size, color]) {
                if let Some(value) = value {
                    state = state.with(key, value);
                }
            }
            let scalars = [
                (FilterKey::MinPrice, min),
                (FilterKey::MaxPrice, max),
                (FilterKey::Sort, sort),
                (FilterKey::Page, page.map(|p| p.to_string())),
            ];
            for (key, value) in scalars {
                if let Some(value) = value {
                    state = state.with(key, FilterValue::Single(value));
                }
            }
            state
        })
}

/// A state drawn from the same small vocabulary as [`product_strategy`], so
/// filters actually select something.
fn catalog_state_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::subsequence(GENDERS.to_vec(), 0..=2),
        prop::sample::subsequence(SIZES.to_vec(), 0..=2),
        prop::sample::subsequence(COLORS.to_vec(), 0..=2),
        proptest::option::of(0u32..200),
        proptest::option::of(50u32..300),
    )
        .prop_map(|(genders, sizes, colors, min, max)| {
            let mut state = FilterState::new();
            for (key, values) in LIST_KEYS.into_iter().zip([genders, sizes, colors]) {
                for value in values {
                    state = add_filter(&state, key, value);
                }
            }
            if let Some(min) = min {
                state = add_filter(&state, FilterKey::MinPrice, &min.to_string());
            }
            if let Some(max) = max {
                state = add_filter(&state, FilterKey::MaxPrice, &max.to_string());
            }
            state
        })
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        prop::sample::select(GENDERS.to_vec()),
        prop::sample::subsequence(SIZES.to_vec(), 1..=3),
        prop::sample::subsequence(COLORS.to_vec(), 1..=2),
        1u32..300,
        proptest::option::of(1u32..300),
        proptest::option::of(prop::sample::select(vec!["New", "Popular", "Sale", ""])),
    )
        .prop_map(|(gender, sizes, colors, price, sale, badge)| {
            let mut product = Product::new(format!("shoe-{price}"), f64::from(price), gender)
                .with_sizes(sizes)
                .with_colors(colors);
            if let Some(sale) = sale {
                product = product.with_sale_price(f64::from(sale));
            }
            if let Some(badge) = badge {
                product = product.with_badge(badge);
            }
            product
        })
}

fn products_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..20)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stringify_then_parse_is_identity(state in state_strategy()) {
        let encoded = stringify_filters(&state);
        prop_assert_eq!(parse_filters(&encoded), state, "encoded as {:?}", encoded);
    }

    #[test]
    fn stringify_is_deterministic(state in state_strategy()) {
        let encoded = stringify_filters(&state);
        prop_assert_eq!(stringify_filters(&parse_filters(&encoded)), encoded);
    }

    #[test]
    fn parse_never_panics(query in "\\PC{0,40}") {
        let _ = parse_filters(&query);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Toggle idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_twice_restores_list_keys(
        state in state_strategy(),
        key in prop::sample::select(LIST_KEYS.to_vec()),
        value in value_text(),
    ) {
        let once = toggle_filter(&state, key, &value);
        prop_assert_eq!(toggle_filter(&once, key, &value), state);
    }

    #[test]
    fn toggle_twice_restores_absent_scalars(
        state in state_strategy(),
        key in prop::sample::select(SCALAR_KEYS.to_vec()),
        value in "[1-9][0-9]{0,3}",
    ) {
        let base = remove_filter(&state, key, None);
        let once = toggle_filter(&base, key, &value);
        prop_assert_eq!(once.scalar(key), Some(value.as_str()));
        prop_assert_eq!(toggle_filter(&once, key, &value), base);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No empty values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn removal_never_leaves_empty_values(
        state in state_strategy(),
        key in prop::sample::select(LIST_KEYS.to_vec()),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..6),
    ) {
        let mut current = state;
        for pick in picks {
            let values = current.values(key).to_vec();
            if values.is_empty() {
                break;
            }
            let victim = pick.get(&values).clone();
            current = if pick.index(2) == 0 {
                remove_filter(&current, key, Some(&victim))
            } else {
                toggle_filter(&current, key, &victim)
            };
            prop_assert!(current.iter().all(|(_, value)| !value.is_empty()));
        }
        let encoded = stringify_filters(&current);
        prop_assert!(!encoded.contains("=&") && !encoded.ends_with('='));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Filter monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn new_category_never_grows_result(
        products in products_strategy(),
        state in catalog_state_strategy(),
        key in prop::sample::select(LIST_KEYS.to_vec()),
        value in prop::sample::select(vec!["men", "kids", "US 9", "red", "light grey"]),
    ) {
        let base = remove_filter(&state, key, None);
        let narrower = add_filter(&base, key, value);

        let wide = filter_products(&products, &base);
        let narrow = filter_products(&products, &narrower);
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(narrow.iter().all(|p| wide.iter().any(|w| std::ptr::eq(*w, *p))));
    }

    #[test]
    fn price_bound_never_grows_result(
        products in products_strategy(),
        state in catalog_state_strategy(),
        bound in 0u32..300,
    ) {
        let base = remove_filter(&state, FilterKey::MinPrice, None);
        let narrower = add_filter(&base, FilterKey::MinPrice, &bound.to_string());
        prop_assert!(
            filter_products(&products, &narrower).len() <= filter_products(&products, &base).len()
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Sorting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn featured_is_stable_partition(products in products_strategy()) {
        let refs: Vec<&Product> = products.iter().collect();
        let once = sort_products(&refs, SortKey::Featured);
        let twice = sort_products(&refs, SortKey::Featured);
        prop_assert_eq!(&once, &twice);

        let first_plain = once.iter().position(|p| !p.has_badge()).unwrap_or(once.len());
        prop_assert!(once[first_plain..].iter().all(|p| !p.has_badge()));

        let badged_in_input: Vec<&Product> =
            refs.iter().copied().filter(|p| p.has_badge()).collect();
        prop_assert_eq!(&once[..first_plain], &badged_in_input[..]);
    }

    #[test]
    fn price_sorts_are_ordered(products in products_strategy()) {
        let refs: Vec<&Product> = products.iter().collect();
        let asc = sort_products(&refs, SortKey::PriceAsc);
        prop_assert!(asc.windows(2).all(|w| w[0].effective_price() <= w[1].effective_price()));
        let desc = sort_products(&refs, SortKey::PriceDesc);
        prop_assert!(desc.windows(2).all(|w| w[0].effective_price() >= w[1].effective_price()));
        prop_assert_eq!(asc.len(), products.len());
    }
}
