// Unit tests for AttributeState and ProviderAttribute

use crate::attribute::{AttributeState, ProviderAttribute};

#[test]
fn given_each_state_when_queried_then_exactly_one_kind_holds() {
    let unknown = AttributeState::Unknown;
    let null = AttributeState::Null;
    let value = AttributeState::value("https://api.example.com");

    assert!(unknown.is_unknown() && !unknown.is_null());
    assert!(null.is_null() && !null.is_unknown());
    assert!(!value.is_null() && !value.is_unknown());
}

/// **VALUE**: Verifies `value_or_empty` only yields a payload for `Value`.
///
/// **BUG THIS CATCHES**: Would catch if Unknown or Null started carrying a placeholder
/// string that then overrides the environment default during precedence resolution.
#[test]
fn given_each_state_when_value_or_empty_then_only_value_has_payload() {
    assert_eq!(AttributeState::Unknown.value_or_empty(), "");
    assert_eq!(AttributeState::Null.value_or_empty(), "");
    assert_eq!(AttributeState::value("x").value_or_empty(), "x");
    assert_eq!(AttributeState::value("").value_or_empty(), "");
}

#[test]
fn given_option_when_converted_then_none_is_null() {
    assert_eq!(AttributeState::from(None::<String>), AttributeState::Null);
    assert_eq!(
        AttributeState::from(Some(String::from("x"))),
        AttributeState::value("x")
    );
    assert_eq!(AttributeState::default(), AttributeState::Null);
}

/// **VALUE**: Verifies declaration order and environment variable names.
///
/// **WHY THIS MATTERS**: Diagnostics are emitted in declaration order (host before token)
/// and practitioners set TODO_HOST / TODO_TOKEN by name.
#[test]
fn given_provider_attributes_when_listed_then_host_precedes_token_with_env_names() {
    assert_eq!(ProviderAttribute::ALL, [ProviderAttribute::Host, ProviderAttribute::Token]);
    assert_eq!(ProviderAttribute::Host.env_var(), "TODO_HOST");
    assert_eq!(ProviderAttribute::Token.env_var(), "TODO_TOKEN");
    assert!(ProviderAttribute::Token.is_sensitive());
    assert!(!ProviderAttribute::Host.is_sensitive());
}

#[test]
fn given_attribute_name_when_looked_up_then_finds_only_declared_attributes() {
    assert_eq!(ProviderAttribute::from_name("host"), Some(ProviderAttribute::Host));
    assert_eq!(ProviderAttribute::from_name("token"), Some(ProviderAttribute::Token));
    assert_eq!(ProviderAttribute::from_name("username"), None);
}
