use super::{
    parse_price_bound, parse_sort_direction, parse_sort_field, DEFAULT_MAX_PRICE,
    DEFAULT_MIN_PRICE,
};
use crate::state::catalog::SortDirection;

#[test]
fn blank_price_bounds_fall_back_to_defaults() {
    assert_eq!(parse_price_bound("", DEFAULT_MIN_PRICE), 0.0);
    assert_eq!(parse_price_bound("   ", DEFAULT_MAX_PRICE), 10_000.0);
}

#[test]
fn valid_price_bounds_parse() {
    assert_eq!(parse_price_bound("25", DEFAULT_MIN_PRICE), 25.0);
    assert_eq!(parse_price_bound(" 99.99 ", DEFAULT_MAX_PRICE), 99.99);
}

#[test]
fn garbage_price_bounds_fall_back() {
    assert_eq!(parse_price_bound("cheap", DEFAULT_MIN_PRICE), 0.0);
    assert_eq!(parse_price_bound("1e999", DEFAULT_MAX_PRICE), 10_000.0);
    assert_eq!(parse_price_bound("NaN", DEFAULT_MAX_PRICE), 10_000.0);
}

#[test]
fn sort_field_recognizes_known_values() {
    assert_eq!(parse_sort_field("name"), "name");
    assert_eq!(parse_sort_field("price"), "price");
    assert_eq!(parse_sort_field("createdAt"), "createdAt");
}

#[test]
fn unknown_sort_field_defaults_to_created_at() {
    assert_eq!(parse_sort_field("rating"), "createdAt");
    assert_eq!(parse_sort_field(""), "createdAt");
}

#[test]
fn sort_direction_defaults_to_descending() {
    assert_eq!(parse_sort_direction("asc"), SortDirection::Asc);
    assert_eq!(parse_sort_direction("desc"), SortDirection::Desc);
    assert_eq!(parse_sort_direction("sideways"), SortDirection::Desc);
}
