use crate::catalog::active_badges;
use crate::commands::{CmdResult, Listing};
use crate::error::Result;
use crate::filters::parse_filters;
use crate::query::{apply, count_active, paginate};
use crate::store::DataStore;
use tracing::debug;

/// Render one page of the catalog for `query`.
///
/// The query is parsed leniently; anything unrecognized is ignored rather
/// than reported. `page_size == 0` lists every match on one page.
pub fn run<S: DataStore>(store: &S, query: &str, page_size: usize) -> Result<CmdResult> {
    let state = parse_filters(query);
    let products = store.list_products()?;

    let matched = apply(&products, &state);
    debug!(
        catalog = products.len(),
        matched = matched.len(),
        sort = %state.sort_key(),
        "applied filters"
    );

    let page = paginate(matched, state.page().unwrap_or(1), page_size);
    let listing = Listing {
        page: page.number,
        total_pages: page.total_pages,
        total_items: page.total_items,
        catalog_size: products.len(),
        active_filters: count_active(&state),
        badges: active_badges(&state),
        sort: state.sort_key(),
    };
    let listed = page.items.into_iter().cloned().collect();

    Ok(CmdResult::default()
        .with_listed_products(listed)
        .with_listing(listing)
        .with_filters(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortKey;
    use crate::model::Product;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed_products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_lists_featured_first() {
        let fixture = StoreFixture::new().with_sample_catalog();
        let result = run(&fixture.store, "", 0).unwrap();

        assert_eq!(
            names(&result),
            ["Air Max 90", "LeBron 21", "Pegasus 40", "Flex Runner"]
        );
        let listing = result.listing.unwrap();
        assert_eq!(listing.active_filters, 0);
        assert_eq!(listing.sort, SortKey::Featured);
        assert_eq!(listing.catalog_size, 4);
    }

    #[test]
    fn filters_and_sorts() {
        let fixture = StoreFixture::new().with_sample_catalog();
        let result = run(&fixture.store, "color=red,white&sort=price_asc", 0).unwrap();

        assert_eq!(
            names(&result),
            ["Flex Runner", "Pegasus 40", "Air Max 90", "LeBron 21"]
        );
        let listing = result.listing.unwrap();
        assert_eq!(listing.active_filters, 2);
        assert_eq!(listing.badges.len(), 2);
    }

    #[test]
    fn no_match_is_not_an_error() {
        let fixture = StoreFixture::new().with_sample_catalog();
        let result = run(&fixture.store, "minPrice=500&maxPrice=100", 0).unwrap();

        assert!(result.listed_products.is_empty());
        assert_eq!(result.listing.unwrap().total_items, 0);
    }

    #[test]
    fn pages_through_matches() {
        let fixture = StoreFixture::new().with_products(5);
        let result = run(&fixture.store, "sort=price_desc&page=2", 2).unwrap();

        assert_eq!(names(&result), ["Test Shoe 3", "Test Shoe 2"]);
        let listing = result.listing.unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(listing.total_pages, 3);
        assert_eq!(listing.total_items, 5);
    }

    #[test]
    fn echoes_normalized_query() {
        let fixture = StoreFixture::new().with_product(Product::new("Cortez", 80.0, "unisex"));
        let result = run(&fixture.store, "?page=1&brand=nike&gender=unisex", 0).unwrap();
        assert_eq!(result.query(), Some("gender=unisex&page=1"));
    }
}
