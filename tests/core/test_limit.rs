//! Validation rules for generation limits

use primegen::core::limit::{GenerationLimit, LimitError, MAXIMUM_GENERATION_LIMIT};

/// Test the four documented rejections
#[test]
fn test_documented_rejections() {
    assert_eq!(GenerationLimit::parse(Some("")), Err(LimitError::Blank));
    assert_eq!(GenerationLimit::parse(Some("r2d2")), Err(LimitError::NotAnInteger));
    assert_eq!(GenerationLimit::parse(Some("0")), Err(LimitError::NotPositive));
    assert_eq!(
        GenerationLimit::parse(Some("2147483648")),
        Err(LimitError::TooLarge)
    );
}

/// Test that rule order decides which error is reported
#[test]
fn test_first_matching_rule_wins() {
    // Blank beats everything
    assert_eq!(GenerationLimit::parse(Some(" \t ")), Err(LimitError::Blank));
    // Syntax is checked before range, whatever the magnitude
    assert_eq!(
        GenerationLimit::parse(Some("-99999999999x")),
        Err(LimitError::NotAnInteger)
    );
    // Lower bound is checked before upper bound
    assert_eq!(
        GenerationLimit::parse(Some("-99999999999999999999")),
        Err(LimitError::NotPositive)
    );
}

/// Test that only ASCII digits are accepted
#[test]
fn test_non_ascii_digits_rejected() {
    assert_eq!(GenerationLimit::parse(Some("١٠")), Err(LimitError::NotAnInteger));
    assert_eq!(GenerationLimit::parse(Some("-١٠")), Err(LimitError::NotAnInteger));
    assert_eq!(GenerationLimit::parse(Some("１０")), Err(LimitError::NotAnInteger));
}

/// Test the edges of the accepted range
#[test]
fn test_range_edges() {
    assert_eq!(GenerationLimit::parse(Some("1")).unwrap().get(), 1);
    assert_eq!(
        GenerationLimit::parse(Some("2147483647")).unwrap().get(),
        MAXIMUM_GENERATION_LIMIT
    );
    assert_eq!(
        GenerationLimit::parse(Some("2147483648")),
        Err(LimitError::TooLarge)
    );
}

/// Test that every accepted value round-trips through its decimal text
#[test]
fn test_parse_is_consistent_with_display() {
    for value in [1, 2, 10, 97, 10_000, 65_536, 1_000_000_007, i32::MAX] {
        let limit = GenerationLimit::parse(Some(&value.to_string())).unwrap();
        assert_eq!(limit.get(), value);
        assert_eq!(limit.to_string(), value.to_string());
    }
}

/// Test that messages are exactly those returned to callers
#[test]
fn test_messages_are_exact() {
    let cases = [
        ("", "generationLimit cannot be blank"),
        ("abc", "generationLimit must be a valid integer"),
        ("-1", "generationLimit cannot be zero or less than zero"),
        ("3000000000", "generationLimit cannot exceed 2147483647"),
    ];
    for (raw, message) in cases {
        let err = GenerationLimit::parse(Some(raw)).unwrap_err();
        assert_eq!(err.to_string(), message, "input {raw:?}");
    }
}
