//! # Product Query Engine
//!
//! Applies a [`FilterState`] to an in-memory product collection.
//!
//! ## Filtering
//!
//! Each active category becomes a [`Predicate`]. Predicates are combined with
//! AND; the values inside one predicate are combined with OR:
//!
//! - **gender**: the product's gender is any selected gender
//! - **size** / **color**: the product offers at least one selected value
//! - **price**: the effective price lies in `[min, max]`, inclusive
//!
//! No predicates means every product passes. `minPrice > maxPrice` is not an
//! error; it simply matches nothing.
//!
//! ## Sorting
//!
//! All orderings use stable sorts, so equal elements keep their input order
//! and repeated calls on the same input agree. `featured` (also the fallback
//! for unknown sort names) moves badged products ahead of the rest.
//!
//! ## Pagination
//!
//! [`paginate`] slices an already sorted list. It is a separate step: filter
//! and sort never look at `page`.

use crate::filters::{FilterKey, FilterState, SortKey, FILTER_KEYS};
use crate::model::Product;

/// One filter category, ready to test products against.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'s> {
    Gender(&'s [String]),
    Size(&'s [String]),
    Color(&'s [String]),
    Price { min: f64, max: f64 },
}

impl Predicate<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::Gender(genders) => genders.contains(&product.gender),
            Predicate::Size(sizes) => product.sizes.iter().any(|s| sizes.contains(s)),
            Predicate::Color(colors) => product.colors.iter().any(|c| colors.contains(c)),
            Predicate::Price { min, max } => {
                let price = product.effective_price();
                price >= *min && price <= *max
            }
        }
    }
}

/// Build the predicates for every active category in `state`.
pub fn predicates(state: &FilterState) -> Vec<Predicate<'_>> {
    let mut predicates = Vec::new();

    let genders = state.values(FilterKey::Gender);
    if !genders.is_empty() {
        predicates.push(Predicate::Gender(genders));
    }
    let sizes = state.values(FilterKey::Size);
    if !sizes.is_empty() {
        predicates.push(Predicate::Size(sizes));
    }
    let colors = state.values(FilterKey::Color);
    if !colors.is_empty() {
        predicates.push(Predicate::Color(colors));
    }
    if let Some((min, max)) = state.price_bounds() {
        predicates.push(Predicate::Price { min, max });
    }

    predicates
}

/// Products matching every active filter, in input order.
pub fn filter_products<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let predicates = predicates(state);
    products
        .iter()
        .filter(|product| predicates.iter().all(|p| p.matches(product)))
        .collect()
}

/// Order `products` by `sort`. The caller's collection is not touched.
pub fn sort_products<'a>(products: &[&'a Product], sort: SortKey) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => {
            sorted.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortKey::Featured => sorted.sort_by_key(|product| !product.has_badge()),
    }
    sorted
}

/// Filter then sort, as a page render does.
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    sort_products(&filter_products(products, state), state.sort_key())
}

/// Number of active filter selections, for the "N filters applied" badge.
///
/// List keys count each held value; the price range counts once no matter
/// how many bounds are set. `sort` and `page` never count.
pub fn count_active(state: &FilterState) -> usize {
    let list_selections: usize = FILTER_KEYS
        .iter()
        .filter(|spec| spec.narrows && spec.key.is_list())
        .map(|spec| state.values(spec.key).len())
        .sum();
    let price = usize::from(state.price_bounds().is_some());
    list_selections + price
}

/// One page of a sorted result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested.
    pub number: u32,
    pub total_pages: u32,
    pub total_items: usize,
}

/// Slice `items` into the requested page.
///
/// Page 0 is read as page 1. `per_page == 0` disables pagination and returns
/// everything as a single page. A page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: usize) -> Page<T> {
    let total_items = items.len();
    let number = page.max(1);

    if per_page == 0 {
        return Page {
            items,
            number: 1,
            total_pages: u32::from(total_items > 0),
            total_items,
        };
    }

    let total_pages = u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX);
    let skip = (number as usize - 1).saturating_mul(per_page);
    let items = items.into_iter().skip(skip).take(per_page).collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}
