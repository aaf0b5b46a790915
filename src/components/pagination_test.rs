use super::{has_next, has_previous, page_label};

#[test]
fn first_page_has_no_previous() {
    assert!(!has_previous(0));
    assert!(has_previous(1));
}

#[test]
fn last_page_has_no_next() {
    assert!(has_next(0, 3));
    assert!(has_next(1, 3));
    assert!(!has_next(2, 3));
}

#[test]
fn single_page_has_neither_direction() {
    assert!(!has_previous(0));
    assert!(!has_next(0, 1));
}

#[test]
fn label_is_one_based() {
    assert_eq!(page_label(0, 3), "Page 1 of 3");
    assert_eq!(page_label(2, 3), "Page 3 of 3");
}

#[test]
fn label_never_shows_zero_total() {
    assert_eq!(page_label(0, 0), "Page 1 of 1");
}
