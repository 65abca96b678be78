use crate::{CoreError, GuestTokenGrant, ScopeId};

use std::str::FromStr;

#[test]
fn given_integer_string_when_parsed_then_scope_id_created() {
    let id = ScopeId::from_str("101").unwrap();

    assert_eq!(id.get(), 101);
    assert_eq!(id.to_string(), "101");
}

#[test]
fn given_padded_integer_string_when_parsed_then_whitespace_ignored() {
    let id = ScopeId::from_str(" 103 ").unwrap();

    assert_eq!(id.get(), 103);
}

#[test]
fn given_zero_when_created_then_accepted() {
    assert!(ScopeId::new(0).is_ok());
}

#[test]
fn given_negative_value_when_created_then_invalid_scope() {
    let result = ScopeId::new(-1);

    assert!(matches!(result, Err(CoreError::InvalidScope { .. })));
}

#[test]
fn given_non_integral_strings_when_parsed_then_invalid_scope() {
    for input in ["1.5", "abc", "", "101 OR 1=1", "-7", "1e3"] {
        let result = ScopeId::from_str(input);
        assert!(
            matches!(result, Err(CoreError::InvalidScope { .. })),
            "expected InvalidScope for {input:?}"
        );
    }
}

#[test]
fn given_negative_json_number_when_deserialized_then_rejected() {
    let result: Result<ScopeId, _> = serde_json::from_str("-5");

    assert!(result.is_err());
}

#[test]
fn given_grant_when_serialized_then_uses_camel_case_fields() {
    let grant = GuestTokenGrant {
        token: "a.b.c".to_string(),
        dashboard_url: "http://localhost:8088/dashboard/12/embedded".to_string(),
        scope_id: ScopeId::new(101).unwrap(),
        subject: "scope-101-user".to_string(),
    };

    let json = serde_json::to_value(&grant).unwrap();

    assert_eq!(json["scopeId"], 101);
    assert_eq!(json["dashboardUrl"], "http://localhost:8088/dashboard/12/embedded");
    assert_eq!(json["subject"], "scope-101-user");
}
