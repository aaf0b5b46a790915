use super::*;

fn product(id: i64, price: f64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: String::new(),
        price,
        stock_quantity: 5,
        image_url: None,
        active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn page_of(ids: &[i64], page_number: u32, total_pages: u32, total_elements: u64) -> Page<Product> {
    Page {
        content: ids.iter().map(|id| product(*id, 10.0)).collect(),
        page_number,
        page_size: 12,
        total_pages,
        total_elements,
    }
}

// =============================================================
// ProductQuery
// =============================================================

#[test]
fn query_defaults_match_listing_contract() {
    let query = ProductQuery::default();
    assert_eq!(query.page, 0);
    assert_eq!(query.size, 12);
    assert!(query.search.is_none());
    assert_eq!(query.sort_by, "createdAt");
    assert_eq!(query.sort_dir, SortDirection::Desc);
}

#[test]
fn search_term_trims_and_filters_blank() {
    let mut query = ProductQuery::default();
    assert!(query.search_term().is_none());

    query.search = Some("  mouse  ".to_owned());
    assert_eq!(query.search_term(), Some("mouse"));

    query.search = Some("   ".to_owned());
    assert!(query.search_term().is_none());
}

#[test]
fn with_page_keeps_filters() {
    let query = ProductQuery {
        search: Some("mouse".to_owned()),
        ..ProductQuery::default()
    };
    let next = query.with_page(4);
    assert_eq!(next.page, 4);
    assert_eq!(next.search.as_deref(), Some("mouse"));
    assert_eq!(next.size, query.size);
}

#[test]
fn sort_direction_strings() {
    assert_eq!(SortDirection::Asc.as_str(), "asc");
    assert_eq!(SortDirection::Desc.as_str(), "desc");
}

// =============================================================
// CatalogState transitions
// =============================================================

#[test]
fn default_catalog_is_loading_and_empty() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.products.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.total_pages, 0);
}

#[test]
fn begin_loading_drops_error_and_keeps_products() {
    let mut state = CatalogState::default();
    state.apply_page(page_of(&[1, 2], 0, 1, 2));
    state.apply_error(LOAD_FAILURE);

    state.begin_loading();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.products.len(), 2);
}

#[test]
fn apply_page_replaces_prior_slice() {
    let mut state = CatalogState::default();
    state.apply_page(page_of(&[1, 2, 3], 0, 2, 15));
    assert_eq!(state.products.len(), 3);
    assert_eq!(state.page, 0);

    state.apply_page(page_of(&[4, 5], 1, 2, 15));
    assert_eq!(state.products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4, 5]);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_elements, 15);
    assert!(!state.loading);
}

#[test]
fn apply_list_resets_pagination_to_single_page() {
    let mut state = CatalogState::default();
    state.apply_page(page_of(&[1], 3, 7, 80));

    state.apply_list(vec![product(9, 12.0), product(10, 15.0)]);
    assert_eq!(state.page, 0);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.total_elements, 2);
    assert_eq!(state.products.len(), 2);
}

#[test]
fn apply_error_keeps_previous_products_visible() {
    let mut state = CatalogState::default();
    state.apply_page(page_of(&[1, 2], 0, 1, 2));

    state.begin_loading();
    state.apply_error(LOAD_FAILURE);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILURE));
    assert!(!state.loading);
    assert_eq!(state.products.len(), 2);
}
