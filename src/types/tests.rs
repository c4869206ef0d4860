use super::lenient;
use super::ClientId;
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_text_trims_strings_and_renders_scalars() {
    let test_cases = vec![
        (json!("  Moscow  "), Some("Moscow")),
        (json!(42), Some("42")),
        (json!(true), Some("true")),
        (json!(""), None),
        (json!("   "), None),
        (json!(null), None),
        (json!(["a"]), None),
        (json!({ "a": 1 }), None),
    ];

    for (input_value, expected_output) in test_cases {
        assert_eq!(lenient::text(Some(&input_value)).as_deref(), expected_output);
    }

    assert_eq!(lenient::text(None), None);
}

#[test]
fn test_decimal_accepts_numbers_and_numeric_strings() -> Result<()> {
    assert_eq!(lenient::decimal(Some(&json!(1234.5))), Some(Decimal::from_str("1234.5")?));
    assert_eq!(lenient::decimal(Some(&json!(20))), Some(Decimal::from(20)));
    assert_eq!(lenient::decimal(Some(&json!(" 99.90 "))), Some(Decimal::from_str("99.90")?));
    assert_eq!(lenient::decimal(Some(&json!("1.5e3"))), Some(Decimal::from(1500)));

    Ok(())
}

#[test]
fn test_decimal_degrades_to_absent_for_garbage() {
    assert!(lenient::decimal(Some(&json!("abc"))).is_none());
    assert!(lenient::decimal(Some(&json!(""))).is_none());
    assert!(lenient::decimal(Some(&json!(null))).is_none());
    assert!(lenient::decimal(Some(&json!(true))).is_none());
    assert!(lenient::decimal(None).is_none());
}

#[test]
fn test_truthy_only_accepts_clearly_set_values() {
    for value in [json!(true), json!(1), json!(-2.5), json!("true"), json!(" TRUE "), json!("1"), json!("yes"), json!("t")] {
        assert!(lenient::truthy(&value), "{value} should be truthy");
    }

    for value in [json!(false), json!(0), json!(0.0), json!("false"), json!(""), json!("no"), json!(null), json!([true]), json!({})] {
        assert!(!lenient::truthy(&value), "{value} should not be truthy");
    }
}

#[test]
fn test_unknown_client_never_collides_with_a_client_named_unknown() {
    let named_unknown = ClientId::from("unknown");

    assert_ne!(named_unknown, ClientId::Unknown);
    assert_eq!(named_unknown.to_string(), ClientId::Unknown.to_string());
    assert!(ClientId::Unknown.is_unknown());
    assert!(!named_unknown.is_unknown());
}

#[test]
fn test_identity_keeps_delivered_value_untouched() {
    let test_cases = vec![
        (json!("A"), Some(ClientId::from("A"))),
        (json!(" A "), Some(ClientId::from(" A "))),
        (json!("   "), Some(ClientId::from("   "))),
        (json!("7"), Some(ClientId::from("7"))),
        (json!(7), Some(ClientId::Scalar("7".to_string()))),
        (json!(false), Some(ClientId::Scalar("false".to_string()))),
        (json!(""), None),
        (json!(null), None),
        (json!(["A"]), None),
    ];

    for (input_value, expected_output) in test_cases {
        assert_eq!(lenient::identity(Some(&input_value)), expected_output);
    }

    assert_eq!(lenient::identity(None), None);
    assert_eq!(ClientId::Scalar("7".to_string()).to_string(), "7");
}
