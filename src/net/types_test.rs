use super::*;

#[test]
fn event_summary_deserializes_backend_payload() {
    let json = serde_json::json!({
        "id": "e-1",
        "name": "Harbor Lights Festival",
        "venue": "Pier 14",
        "city": "San Diego",
        "category": "music",
        "starts_at": "2026-09-12T19:30:00Z",
        "price_cents": 4500,
        "sold_out": true
    });
    let event: EventSummary = serde_json::from_value(json).unwrap();
    assert_eq!(event.id, "e-1");
    assert_eq!(event.category, "music");
    assert_eq!(event.price_cents, 4500);
    assert!(event.sold_out);
}

#[test]
fn event_summary_sold_out_defaults_to_false() {
    let json = serde_json::json!({
        "id": "e-2",
        "name": "Open Mic",
        "venue": "The Basement",
        "city": "Austin",
        "category": "music",
        "starts_at": "2026-10-01T20:00:00Z",
        "price_cents": 0
    });
    let event: EventSummary = serde_json::from_value(json).unwrap();
    assert!(!event.sold_out);
}

#[test]
fn order_status_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(OrderStatus::Paid).unwrap(), serde_json::json!("paid"));
    assert_eq!(
        serde_json::from_value::<OrderStatus>(serde_json::json!("refunded")).unwrap(),
        OrderStatus::Refunded
    );
}

#[test]
fn page_result_deserializes_items_and_total() {
    let json = serde_json::json!({
        "items": [{ "id": "t-1", "order_id": "o-1", "code": "QR-77", "seat": null }],
        "total": 41
    });
    let page: PageResult<Ticket> = serde_json::from_value(json).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].code, "QR-77");
    assert_eq!(page.total, 41);
}

#[test]
fn login_response_carries_token_and_user() {
    let json = serde_json::json!({
        "token": "tok-abc",
        "user": {
            "id": "u-1",
            "name": "Dana",
            "email": "dana@example.com",
            "role": "user",
            "avatar_url": null
        }
    });
    let body: LoginResponse = serde_json::from_value(json).unwrap();
    assert_eq!(body.token, "tok-abc");
    assert_eq!(body.user.email, "dana@example.com");
}
