use super::{build_draft, DraftErrors};

#[test]
fn complete_input_builds_a_draft() {
    let draft = build_draft(
        "Wireless Mouse",
        "Ergonomic 2.4GHz mouse",
        "29.99",
        "40",
        "https://cdn.example.com/mouse.jpg",
    )
    .unwrap();

    assert_eq!(draft.name, "Wireless Mouse");
    assert_eq!(draft.description, "Ergonomic 2.4GHz mouse");
    assert_eq!(draft.price, 29.99);
    assert_eq!(draft.stock_quantity, 40);
    assert_eq!(
        draft.image_url.as_deref(),
        Some("https://cdn.example.com/mouse.jpg")
    );
    assert!(draft.active);
}

#[test]
fn fields_are_trimmed() {
    let draft = build_draft("  Mouse  ", " desc ", " 5 ", " 3 ", "   ").unwrap();
    assert_eq!(draft.name, "Mouse");
    assert_eq!(draft.description, "desc");
    assert_eq!(draft.price, 5.0);
    assert_eq!(draft.stock_quantity, 3);
}

#[test]
fn blank_image_url_is_dropped() {
    let draft = build_draft("Mouse", "desc", "5", "3", "").unwrap();
    assert_eq!(draft.image_url, None);
}

#[test]
fn missing_name_and_description_are_reported_together() {
    let errors = build_draft("", "   ", "5", "3", "").unwrap_err();
    assert_eq!(errors.name, Some("Product name is required"));
    assert_eq!(errors.description, Some("Product description is required"));
    assert_eq!(errors.price, None);
    assert_eq!(errors.stock_quantity, None);
}

#[test]
fn invalid_price_is_rejected() {
    for bad in ["", "abc", "-1", "NaN"] {
        let errors = build_draft("Mouse", "desc", bad, "3", "").unwrap_err();
        assert_eq!(errors.price, Some("Valid price is required"), "price {bad:?}");
    }
}

#[test]
fn zero_price_is_accepted() {
    let draft = build_draft("Mouse", "desc", "0", "3", "").unwrap();
    assert_eq!(draft.price, 0.0);
}

#[test]
fn invalid_stock_is_rejected() {
    for bad in ["", "abc", "-1", "2.5"] {
        let errors = build_draft("Mouse", "desc", "5", bad, "").unwrap_err();
        assert_eq!(
            errors.stock_quantity,
            Some("Valid stock quantity is required"),
            "stock {bad:?}"
        );
    }
}

#[test]
fn zero_stock_is_accepted() {
    let draft = build_draft("Mouse", "desc", "5", "0", "").unwrap();
    assert_eq!(draft.stock_quantity, 0);
}

#[test]
fn empty_errors_struct_reports_empty() {
    assert!(DraftErrors::default().is_empty());
    let errors = DraftErrors {
        price: Some("Valid price is required"),
        ..DraftErrors::default()
    };
    assert!(!errors.is_empty());
}
