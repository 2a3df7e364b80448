use super::*;

#[test]
fn parse_reads_integer_count() {
    assert_eq!(parse_unread_count(r#"{"count": 5}"#), Ok(5));
    assert_eq!(parse_unread_count(r#"{"count": 0}"#), Ok(0));
}

#[test]
fn parse_treats_missing_or_null_as_zero() {
    assert_eq!(parse_unread_count("{}"), Ok(0));
    assert_eq!(parse_unread_count(r#"{"count": null}"#), Ok(0));
}

#[test]
fn parse_ignores_extra_fields() {
    assert_eq!(parse_unread_count(r#"{"count": 2, "user": "u-1"}"#), Ok(2));
}

#[test]
fn parse_rejects_non_json() {
    let err = parse_unread_count("<html>login</html>").unwrap_err();
    assert!(matches!(err, ViewError::Malformed(_)));
}

#[test]
fn parse_rejects_negative_and_fractional_counts() {
    assert!(matches!(parse_unread_count(r#"{"count": -1}"#), Err(ViewError::Malformed(_))));
    assert!(matches!(parse_unread_count(r#"{"count": 1.5}"#), Err(ViewError::Malformed(_))));
    assert!(matches!(parse_unread_count(r#"{"count": "3"}"#), Err(ViewError::Malformed(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_source_is_unavailable_natively() {
    let source = HttpCountSource::new("/notifications/unread-count");
    let result = futures::executor::block_on(source.fetch_count());
    assert!(matches!(result, Err(ViewError::Request(msg)) if msg.contains("/notifications/unread-count")));
}
