use super::*;
use crate::state::catalog::SortDirection;

fn query() -> ProductQuery {
    ProductQuery::default()
}

#[test]
fn default_listing_path_uses_products_endpoint() {
    assert_eq!(
        products_path(&query()),
        "/products?page=0&size=12&sortBy=createdAt&sortDir=desc"
    );
}

#[test]
fn listing_path_carries_page_size_and_sort() {
    let q = ProductQuery {
        page: 3,
        size: 24,
        sort_by: "price".to_owned(),
        sort_dir: SortDirection::Asc,
        ..query()
    };
    assert_eq!(products_path(&q), "/products?page=3&size=24&sortBy=price&sortDir=asc");
}

#[test]
fn search_term_routes_to_search_endpoint() {
    let q = ProductQuery {
        search: Some("wireless mouse".to_owned()),
        ..query()
    };
    assert_eq!(
        products_path(&q),
        "/products/search?query=wireless%20mouse&page=0&size=12&sortBy=createdAt&sortDir=desc"
    );
}

#[test]
fn blank_search_term_uses_default_listing() {
    let q = ProductQuery {
        search: Some("   ".to_owned()),
        ..query()
    };
    assert!(products_path(&q).starts_with("/products?"));
}

#[test]
fn search_term_is_percent_encoded() {
    assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_query_value("caf\u{e9}"), "caf%C3%A9");
    assert_eq!(encode_query_value("plain-term_0.9~"), "plain-term_0.9~");
}

#[test]
fn product_path_formats_id() {
    assert_eq!(product_path(42), "/products/42");
}

#[test]
fn price_range_path_formats_bounds() {
    assert_eq!(price_range_path(10.0, 20.5), "/products/price-range?minPrice=10&maxPrice=20.5");
}

#[test]
fn inverted_price_range_is_empty() {
    assert!(price_range_is_empty(20.0, 10.0));
    assert!(!price_range_is_empty(10.0, 20.0));
    assert!(!price_range_is_empty(10.0, 10.0));
}

#[test]
fn default_base_url_points_at_local_backend() {
    assert!(api_base_url().ends_with("/api"));
}
