use super::*;

#[test]
fn page_count_rounds_up_partial_pages() {
    assert_eq!(page_count(41, 10), 5);
    assert_eq!(page_count(40, 10), 4);
    assert_eq!(page_count(1, 10), 1);
}

#[test]
fn page_count_zero_total_is_zero_pages() {
    assert_eq!(page_count(0, 10), 0);
}

#[test]
fn page_count_zero_page_size_is_zero() {
    assert_eq!(page_count(100, 0), 0);
}

#[test]
fn has_prev_only_past_first_page() {
    assert!(!has_prev(1));
    assert!(has_prev(2));
}

#[test]
fn has_next_only_before_last_page() {
    assert!(has_next(1, 3));
    assert!(has_next(2, 3));
    assert!(!has_next(3, 3));
    assert!(!has_next(1, 1));
}
