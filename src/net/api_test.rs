use super::*;

#[test]
fn list_query_string_includes_paging_first() {
    let query = ListQuery::first_page(12);
    assert_eq!(list_query_string(&query), "page=1&page_size=12");
}

#[test]
fn list_query_string_appends_search_and_filters() {
    let query = ListQuery::first_page(10)
        .with_search("jazz night")
        .with_filter("category", Some("music"))
        .with_filter("city", Some("San Diego"));
    assert_eq!(
        list_query_string(&query),
        "page=1&page_size=10&search=jazz%20night&category=music&city=San%20Diego"
    );
}

#[test]
fn empty_search_is_omitted_from_query_string() {
    let query = ListQuery::first_page(10).with_filter("category", Some("arts"));
    assert_eq!(list_query_string(&query), "page=1&page_size=10&category=arts");
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("50% off?"), "50%25%20off%3F");
    assert_eq!(encode_component("plain-text_1.0~x"), "plain-text_1.0~x");
}

#[test]
fn events_endpoint_formats_expected_path() {
    let query = ListQuery::first_page(12).with_search("fest");
    assert_eq!(events_endpoint(&query), "/api/events?page=1&page_size=12&search=fest");
}

#[test]
fn orders_endpoint_formats_expected_path() {
    let query = ListQuery::first_page(10).with_filter("status", Some("paid"));
    assert_eq!(orders_endpoint(&query), "/api/orders?page=1&page_size=10&status=paid");
}

#[test]
fn favorite_endpoint_escapes_event_id() {
    assert_eq!(favorite_endpoint("e-123"), "/api/favorites/e-123");
    assert_eq!(favorite_endpoint("odd id"), "/api/favorites/odd%20id");
}

#[test]
fn order_tickets_endpoint_formats_expected_path() {
    assert_eq!(order_tickets_endpoint("o-9"), "/api/orders/o-9/tickets");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}
