//! Option catalog: the values the filter panel offers, with display labels.
//!
//! The catalog is presentation data. Filtering and sorting never consult it;
//! a query may select a color the catalog does not list and it still filters.
//! The catalog is only used to label active filters and to list choices.

use crate::filters::{FilterKey, FilterState, SortKey};

/// A selectable option with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FilterOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// A color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub value: &'static str,
    pub label: &'static str,
    pub hex: &'static str,
}

impl ColorOption {
    const fn new(value: &'static str, label: &'static str, hex: &'static str) -> Self {
        Self { value, label, hex }
    }
}

/// A preset price range. Bounds are kept as the strings written to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub label: &'static str,
    pub min: &'static str,
    pub max: &'static str,
}

impl PriceRange {
    const fn new(label: &'static str, min: &'static str, max: &'static str) -> Self {
        Self { label, min, max }
    }
}

pub const GENDERS: &[FilterOption] = &[
    FilterOption::new("men", "Men"),
    FilterOption::new("women", "Women"),
    FilterOption::new("kids", "Kids"),
    FilterOption::new("unisex", "Unisex"),
];

pub const SIZES: &[FilterOption] = &[
    FilterOption::new("US 6", "US 6"),
    FilterOption::new("US 7", "US 7"),
    FilterOption::new("US 8", "US 8"),
    FilterOption::new("US 9", "US 9"),
    FilterOption::new("US 10", "US 10"),
    FilterOption::new("US 11", "US 11"),
    FilterOption::new("US 12", "US 12"),
    FilterOption::new("US 13", "US 13"),
];

pub const COLORS: &[ColorOption] = &[
    ColorOption::new("black", "Black", "#000000"),
    ColorOption::new("white", "White", "#FFFFFF"),
    ColorOption::new("red", "Red", "#FF0000"),
    ColorOption::new("blue", "Blue", "#0000FF"),
    ColorOption::new("green", "Green", "#00FF00"),
    ColorOption::new("yellow", "Yellow", "#FFFF00"),
    ColorOption::new("orange", "Orange", "#FFA500"),
    ColorOption::new("pink", "Pink", "#FFC0CB"),
    ColorOption::new("purple", "Purple", "#800080"),
    ColorOption::new("grey", "Grey", "#808080"),
    ColorOption::new("brown", "Brown", "#A52A2A"),
];

pub const PRICE_RANGES: &[PriceRange] = &[
    PriceRange::new("Under $50", "0", "50"),
    PriceRange::new("$50 - $100", "50", "100"),
    PriceRange::new("$100 - $150", "100", "150"),
    PriceRange::new("Over $150", "150", "1000"),
];

pub fn gender_label(value: &str) -> Option<&'static str> {
    GENDERS.iter().find(|o| o.value == value).map(|o| o.label)
}

pub fn color_option(value: &str) -> Option<&'static ColorOption> {
    COLORS.iter().find(|o| o.value == value)
}

/// Display label of a sort order.
pub fn sort_label(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Featured => "Featured",
        SortKey::Newest => "Newest",
        SortKey::PriceAsc => "Price: Low to High",
        SortKey::PriceDesc => "Price: High to Low",
    }
}

/// The preset whose bounds equal the selected bounds exactly, as strings.
///
/// `minPrice=50&maxPrice=100` matches "$50 - $100"; `minPrice=50.0` or a
/// single bound does not match anything.
pub fn matching_price_range(state: &FilterState) -> Option<&'static PriceRange> {
    let min = state.scalar(FilterKey::MinPrice)?;
    let max = state.scalar(FilterKey::MaxPrice)?;
    PRICE_RANGES.iter().find(|r| r.min == min && r.max == max)
}

/// A removable chip shown above the grid for one active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub label: String,
    /// Wire name of the key the badge removes, or `price` for a range.
    pub key: &'static str,
    pub value: String,
}

/// Badges for the active selections, in panel order.
///
/// Gender and color values outside the catalog get no badge. Every size gets
/// one. The price range gets one only when it is a preset; custom bounds
/// still filter but have no badge.
pub fn active_badges(state: &FilterState) -> Vec<FilterBadge> {
    let mut badges = Vec::new();

    for value in state.values(FilterKey::Gender) {
        if let Some(label) = gender_label(value) {
            badges.push(FilterBadge {
                label: label.to_string(),
                key: FilterKey::Gender.name(),
                value: value.clone(),
            });
        }
    }

    for value in state.values(FilterKey::Size) {
        badges.push(FilterBadge {
            label: format!("Size: {value}"),
            key: FilterKey::Size.name(),
            value: value.clone(),
        });
    }

    for value in state.values(FilterKey::Color) {
        if let Some(option) = color_option(value) {
            badges.push(FilterBadge {
                label: option.label.to_string(),
                key: FilterKey::Color.name(),
                value: value.clone(),
            });
        }
    }

    if let Some(range) = matching_price_range(state) {
        badges.push(FilterBadge {
            label: range.label.to_string(),
            key: "price",
            value: format!("{}-{}", range.min, range.max),
        });
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::parse_filters;

    fn labels(state: &FilterState) -> Vec<String> {
        active_badges(state).into_iter().map(|b| b.label).collect()
    }

    #[test]
    fn badges_follow_panel_order() {
        let state = parse_filters("color=red&size=US%209&gender=women,kids");
        assert_eq!(labels(&state), ["Women", "Kids", "Size: US 9", "Red"]);
    }

    #[test]
    fn unknown_gender_and_color_have_no_badge() {
        let state = parse_filters("gender=aliens&color=chartreuse&size=99");
        assert_eq!(labels(&state), ["Size: 99"]);
    }

    #[test]
    fn preset_price_range_has_badge() {
        let badges = active_badges(&parse_filters("minPrice=50&maxPrice=100"));
        assert_eq!(
            badges,
            [FilterBadge {
                label: "$50 - $100".into(),
                key: "price",
                value: "50-100".into(),
            }]
        );
    }

    #[test]
    fn custom_price_range_has_no_badge() {
        assert!(active_badges(&parse_filters("minPrice=60&maxPrice=100")).is_empty());
        assert!(active_badges(&parse_filters("minPrice=50.0&maxPrice=100")).is_empty());
        assert!(active_badges(&parse_filters("minPrice=50")).is_empty());
    }

    #[test]
    fn lookups() {
        assert_eq!(gender_label("unisex"), Some("Unisex"));
        assert_eq!(color_option("grey").map(|c| c.hex), Some("#808080"));
        assert_eq!(sort_label(SortKey::PriceDesc), "Price: High to Low");
        assert_eq!(SIZES.len(), 8);
    }
}
