use dhcid_domain::{DomainError, Duid};

#[test]
fn test_parse_plain_hex() {
    let duid = Duid::parse("000100012a3b4c5d").unwrap();

    assert_eq!(
        duid.as_bytes(),
        &[0x00, 0x01, 0x00, 0x01, 0x2a, 0x3b, 0x4c, 0x5d]
    );
    assert_eq!(duid.len(), 8);
}

#[test]
fn test_parse_strips_colons_and_dashes() {
    let colons = Duid::parse("00:01:00:01:2a:3b:4c:5d").unwrap();
    let dashes = Duid::parse("00-01-00-01-2a-3b-4c-5d").unwrap();
    let mixed = Duid::parse("0001:0001-2a3b:4c5d").unwrap();
    let plain = Duid::parse("000100012a3b4c5d").unwrap();

    assert_eq!(colons, plain);
    assert_eq!(dashes, plain);
    assert_eq!(mixed, plain);
}

#[test]
fn test_parse_is_case_insensitive() {
    let upper = Duid::parse("00:03:00:01:AA:BB:CC:DD:EE:FF").unwrap();
    let lower = Duid::parse("00:03:00:01:aa:bb:cc:dd:ee:ff").unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn test_parse_single_byte() {
    let duid = Duid::parse("ff").unwrap();

    assert_eq!(duid.as_bytes(), &[0xff]);
    assert!(!duid.is_empty());
}

#[test]
fn test_parse_rejects_odd_nibble_count() {
    let result = Duid::parse("00:01:0");

    assert!(matches!(result, Err(DomainError::MalformedIdentifier(_))));
}

#[test]
fn test_parse_rejects_non_hex() {
    let result = Duid::parse("00:01:xy");

    assert!(matches!(result, Err(DomainError::MalformedIdentifier(_))));
}

#[test]
fn test_parse_rejects_separators_only() {
    let result = Duid::parse(":-:");

    assert!(matches!(result, Err(DomainError::MalformedIdentifier(_))));
}

#[test]
fn test_parse_rejects_whitespace() {
    let result = Duid::parse("00 01");

    assert!(matches!(result, Err(DomainError::MalformedIdentifier(_))));
}

#[test]
fn test_parse_empty_is_argument_error() {
    let result = Duid::parse("");

    assert!(matches!(result, Err(DomainError::InvalidArgumentCount(_))));
}

#[test]
fn test_display() {
    let duid = Duid::parse("0001ABCD").unwrap();

    assert_eq!(duid.to_string(), "00:01:ab:cd");
}
