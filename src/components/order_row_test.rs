use super::*;

#[test]
fn status_class_per_variant() {
    assert_eq!(status_class(OrderStatus::Paid), "order-row__status--paid");
    assert_eq!(status_class(OrderStatus::Pending), "order-row__status--pending");
    assert_eq!(status_class(OrderStatus::Refunded), "order-row__status--refunded");
}

#[test]
fn status_label_per_variant() {
    assert_eq!(status_label(OrderStatus::Paid), "Paid");
    assert_eq!(status_label(OrderStatus::Pending), "Pending");
    assert_eq!(status_label(OrderStatus::Refunded), "Refunded");
}
