use super::*;

#[test]
fn empty_and_whitespace_text_fields_fail() {
    assert_eq!(validate_name("").as_deref(), Some("Enter a name"));
    assert_eq!(validate_name("   ").as_deref(), Some("Name cannot be blank"));
    assert_eq!(
        validate_description("").as_deref(),
        Some("Enter order description")
    );
    assert_eq!(
        validate_description("\t ").as_deref(),
        Some("Description cannot be blank")
    );
}

#[test]
fn text_length_bounds_are_enforced() {
    assert_eq!(validate_name("A").as_deref(), Some("Name must be 2-50 length"));
    assert_eq!(
        validate_name(&"x".repeat(51)).as_deref(),
        Some("Name must be 2-50 length")
    );
    assert_eq!(validate_name("Al"), None);
    assert_eq!(validate_name(&"x".repeat(50)), None);
    assert_eq!(
        validate_description("a").as_deref(),
        Some("Description must be 2-50 length")
    );
    assert_eq!(validate_description("TV"), None);
}

#[test]
fn email_syntax_is_checked_regardless_of_length() {
    assert_eq!(validate_email("").as_deref(), Some("Enter an email"));
    for bad in [
        "not-an-email",
        "@x.com",
        "ann@",
        "ann@x",
        "ann@@x.com",
        "ann @x.com",
        "ann@x..com",
        "ann@.com",
    ] {
        assert_eq!(
            validate_email(bad).as_deref(),
            Some("Invalid email format"),
            "expected {bad:?} to fail"
        );
    }
    assert_eq!(validate_email("ann@x.com"), None);
    assert_eq!(validate_email("first.last@sub.example.org"), None);
}

#[test]
fn price_presence_is_required() {
    assert_eq!(validate_price(None).as_deref(), Some("Enter order price"));
    assert_eq!(validate_price(Some(1.5)), None);
}

#[test]
fn snap_price_enforces_floor_and_step() {
    assert_eq!(snap_price(0.0), 0.5);
    assert_eq!(snap_price(0.3), 0.5);
    assert_eq!(snap_price(-4.0), 0.5);
    assert_eq!(snap_price(1.26), 1.5);
    assert_eq!(snap_price(1.24), 1.0);
    assert_eq!(snap_price(199.5), 199.5);
    // Whatever comes out sits on the 0.5 grid.
    for raw in [0.1, 0.74, 3.33, 87.12] {
        let snapped = snap_price(raw);
        assert_eq!((snapped * 2.0).fract(), 0.0, "{raw} snapped to {snapped}");
        assert!(snapped >= PRICE_MIN);
    }
}
