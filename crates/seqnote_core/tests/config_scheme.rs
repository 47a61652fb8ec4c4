use seqnote_core::{Scheme, SequenceConfig, SequenceService};

#[test]
fn scheme_uses_snake_case_wire_names() {
    assert_eq!(
        serde_json::to_value(Scheme::Alphanumeric).unwrap(),
        "alphanumeric"
    );
    let decoded: Scheme = serde_json::from_value(serde_json::json!("numeric")).unwrap();
    assert_eq!(decoded, Scheme::Numeric);
}

#[test]
fn config_deserializes_with_defaults() {
    let empty: SequenceConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.scheme, Scheme::Numeric);

    let alpha: SequenceConfig = serde_json::from_str(r#"{"scheme":"alphanumeric"}"#).unwrap();
    assert_eq!(alpha.scheme, Scheme::Alphanumeric);
    assert_eq!(SequenceService::from_config(&alpha).scheme(), Scheme::Alphanumeric);
}

#[test]
fn config_rejects_unknown_scheme_names() {
    let result = serde_json::from_str::<SequenceConfig>(r#"{"scheme":"roman"}"#);
    assert!(result.is_err());
}
