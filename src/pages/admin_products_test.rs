use super::stock_counts;
use crate::net::types::Product;

fn product(id: i64, stock_quantity: u32) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: String::new(),
        price: 10.0,
        stock_quantity,
        image_url: None,
        active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn counts_split_by_stock_band() {
    let products = vec![
        product(1, 0),
        product(2, 1),
        product(3, 10),
        product(4, 11),
        product(5, 500),
    ];
    assert_eq!(stock_counts(&products), (2, 2, 1));
}

#[test]
fn empty_page_counts_zero() {
    assert_eq!(stock_counts(&[]), (0, 0, 0));
}
