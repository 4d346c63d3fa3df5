//! Filter key registry and sort keys.
//!
//! Every query parameter the storefront understands is described here: its
//! wire name and whether it holds a list of values or a single scalar.

use std::fmt;
use std::str::FromStr;

/// A recognized query parameter.
///
/// Declaration order is significant: it is the order in which keys are
/// emitted by [`stringify_filters`](super::stringify_filters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Gender,
    Size,
    Color,
    MinPrice,
    MaxPrice,
    Sort,
    Page,
}

/// The shape of the values a key may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Multi-valued (e.g. `color=red,blue`); add/remove work on membership.
    List,
    /// Single-valued; add overwrites and remove deletes the whole key.
    Scalar,
}

/// Specification for a single query parameter.
#[derive(Debug, Clone)]
pub struct FilterKeySpec {
    pub key: FilterKey,
    /// Name used in the query string.
    pub name: &'static str,
    pub kind: FilterKind,
    /// Whether the key contributes to the active filter count.
    ///
    /// `sort` and `page` shape the listing but never narrow it.
    pub narrows: bool,
}

impl FilterKeySpec {
    const fn new(key: FilterKey, name: &'static str, kind: FilterKind) -> Self {
        Self {
            key,
            name,
            kind,
            narrows: true,
        }
    }

    const fn presentational(mut self) -> Self {
        self.narrows = false;
        self
    }
}

/// Registry of all query parameters, in emission order.
pub const FILTER_KEYS: &[FilterKeySpec] = &[
    FilterKeySpec::new(FilterKey::Gender, "gender", FilterKind::List),
    FilterKeySpec::new(FilterKey::Size, "size", FilterKind::List),
    FilterKeySpec::new(FilterKey::Color, "color", FilterKind::List),
    FilterKeySpec::new(FilterKey::MinPrice, "minPrice", FilterKind::Scalar),
    FilterKeySpec::new(FilterKey::MaxPrice, "maxPrice", FilterKind::Scalar),
    FilterKeySpec::new(FilterKey::Sort, "sort", FilterKind::Scalar).presentational(),
    FilterKeySpec::new(FilterKey::Page, "page", FilterKind::Scalar).presentational(),
];

impl FilterKey {
    pub fn spec(self) -> &'static FilterKeySpec {
        // FILTER_KEYS is laid out in declaration order
        &FILTER_KEYS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn kind(self) -> FilterKind {
        self.spec().kind
    }

    pub fn is_list(self) -> bool {
        self.kind() == FilterKind::List
    }

    /// Look up a key by its query-string name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        FILTER_KEYS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.key)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = FILTER_KEYS.iter().map(|spec| spec.name).collect();
            format!("Unknown filter key: {} (expected one of {})", s, known.join(", "))
        })
    }
}

/// Product ordering selected by the `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Badged products first, otherwise input order.
    #[default]
    Featured,
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        }
    }

    /// Strict lookup; `None` for anything that is not a known sort name.
    pub fn parse(value: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|key| key.as_param() == value)
    }

    /// Lenient lookup used when rendering: unknown values mean `Featured`.
    pub fn from_param(value: &str) -> Self {
        SortKey::parse(value).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_in_declaration_order() {
        for (i, spec) in FILTER_KEYS.iter().enumerate() {
            assert_eq!(spec.key as usize, i, "{} is out of place", spec.name);
        }
    }

    #[test]
    fn list_and_scalar_kinds() {
        assert!(FilterKey::Gender.is_list());
        assert!(FilterKey::Size.is_list());
        assert!(FilterKey::Color.is_list());
        assert_eq!(FilterKey::MinPrice.kind(), FilterKind::Scalar);
        assert_eq!(FilterKey::MaxPrice.kind(), FilterKind::Scalar);
        assert_eq!(FilterKey::Sort.kind(), FilterKind::Scalar);
        assert_eq!(FilterKey::Page.kind(), FilterKind::Scalar);
    }

    #[test]
    fn only_sort_and_page_are_presentational() {
        let presentational: Vec<_> = FILTER_KEYS
            .iter()
            .filter(|spec| !spec.narrows)
            .map(|spec| spec.key)
            .collect();
        assert_eq!(presentational, vec![FilterKey::Sort, FilterKey::Page]);
    }

    #[test]
    fn from_name_round_trips() {
        for spec in FILTER_KEYS {
            assert_eq!(FilterKey::from_name(spec.name), Some(spec.key));
        }
        assert_eq!(FilterKey::from_name("minprice"), None);
        assert_eq!(FilterKey::from_name("brand"), None);
    }

    #[test]
    fn from_str_reports_known_keys() {
        let err = "brand".parse::<FilterKey>().unwrap_err();
        assert!(err.contains("brand"));
        assert!(err.contains("minPrice"));
    }

    #[test]
    fn sort_key_fallback_is_featured() {
        assert_eq!(SortKey::from_param("newest"), SortKey::Newest);
        assert_eq!(SortKey::from_param("price_asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::from_param("price_desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::from_param("popularity"), SortKey::Featured);
        assert_eq!(SortKey::from_param(""), SortKey::Featured);
        assert_eq!(SortKey::parse("popularity"), None);
    }
}
