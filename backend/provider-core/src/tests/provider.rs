// Unit tests for the provider surface: metadata, schema, registries, raw configure

use crate::configure::ResolvedConfiguration;
use crate::environment::EnvironmentSnapshot;
use crate::provider::{DEV_VERSION, TodoProvider};

use serde_json::json;

#[test]
fn given_provider_when_metadata_requested_then_reports_type_and_version() {
    let metadata = TodoProvider::new(DEV_VERSION).metadata();

    assert_eq!(metadata.type_name, "todo");
    assert_eq!(metadata.version, "dev");
}

/// **VALUE**: The schema declares both attributes optional and only the token sensitive.
///
/// **BUG THIS CATCHES**: Would catch the token losing its sensitive flag, which would make
/// the host runtime print it in plans.
#[test]
fn given_provider_when_schema_requested_then_token_is_sensitive_and_both_optional() {
    let schema = TodoProvider::new("test").schema();

    let names: Vec<&str> = schema.attributes.iter().map(|a| a.name).collect();
    assert_eq!(names, ["host", "token"]);
    assert!(schema.attributes.iter().all(|a| a.optional));
    assert!(schema.attribute("token").unwrap().sensitive);
    assert!(!schema.attribute("host").unwrap().sensitive);
    assert!(schema.attribute("username").is_none());
}

#[test]
fn given_provider_when_registries_requested_then_both_are_empty() {
    let provider = TodoProvider::new("test");

    assert!(provider.data_sources().is_empty());
    assert!(provider.resources().is_empty());
}

#[test]
fn given_bad_raw_config_when_configured_then_decode_errors_stop_before_validation() {
    // GIVEN: A wrong-typed host and an unknown token
    let raw = json!({"host": true, "token": {"unknown": true}});
    let factory = |_: ResolvedConfiguration| Ok::<(), String>(());

    // WHEN: Configuring from raw
    let diagnostics = TodoProvider::new("test")
        .configure_raw(&raw, &EnvironmentSnapshot::new(), &factory)
        .unwrap_err();

    // THEN: Only the decode error is reported, no unknown-token record
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.as_slice()[0].summary(), "Value Conversion Error");
}

#[test]
fn given_valid_raw_config_when_configured_then_factory_builds_client() {
    let raw = json!({"host": "https://api.example.com", "token": "secret-abc"});
    let factory = |resolved: ResolvedConfiguration| Ok::<String, String>(resolved.host);

    let client = TodoProvider::new("test").configure_raw(&raw, &EnvironmentSnapshot::new(), &factory);

    assert_eq!(client, Ok(String::from("https://api.example.com")));
}
