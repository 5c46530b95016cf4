use provider_core::configure::ResolvedConfiguration;
use provider_core::provider::TEST_VERSION;
use provider_core::{
    AttributeState, EnvironmentSnapshot, ProviderConfig, TodoClientFactory, TodoProvider,
};

use std::cell::Cell;

use serde_json::json;

// ============================================================================
// End-to-end resolution scenarios through the public provider surface
// ============================================================================

fn summaries(diagnostics: &provider_core::Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|d| d.summary().to_string()).collect()
}

/// **VALUE**: TODO_HOST alone is not enough; the missing token is reported.
///
/// **WHY THIS MATTERS**: This is the most common misconfiguration: the host is exported
/// in the shell profile but the token is not.
#[test]
fn given_null_config_and_only_host_env_when_configured_then_token_missing_and_no_client() {
    // GIVEN: Null attributes, TODO_HOST set, TODO_TOKEN empty
    let environment = EnvironmentSnapshot::new()
        .with("TODO_HOST", "https://api.example.com")
        .with("TODO_TOKEN", "");
    let invoked = Cell::new(false);
    let factory = |_: ResolvedConfiguration| {
        invoked.set(true);
        Ok::<(), String>(())
    };

    // WHEN: Configuring
    let result = TodoProvider::new(TEST_VERSION).configure(
        &ProviderConfig::default(),
        &environment,
        &factory,
    );

    // THEN: One missing-token record, factory never invoked
    let diagnostics = result.unwrap_err();
    assert_eq!(summaries(&diagnostics), ["Missing TODO API Token"]);
    assert_eq!(diagnostics.as_slice()[0].attribute_path().unwrap().as_str(), "token");
    assert!(!invoked.get());
}

/// **VALUE**: Concrete values with no environment produce a real TODO API client.
#[test]
fn given_concrete_values_and_no_env_when_configured_with_real_factory_then_client_returned() {
    // GIVEN: Concrete host and token
    let config = ProviderConfig::new(
        AttributeState::value("https://api.example.com"),
        AttributeState::value("secret-abc"),
    );

    // WHEN: Configuring with the TODO API client factory
    let client = TodoProvider::new(TEST_VERSION)
        .configure(&config, &EnvironmentSnapshot::new(), &TodoClientFactory)
        .unwrap();

    // THEN: The client targets the configured host
    assert_eq!(client.base_url().as_str(), "https://api.example.com/");
}

#[test]
fn given_concrete_values_when_configured_then_factory_receives_exact_values() {
    let config = ProviderConfig::new(
        AttributeState::value("https://api.example.com"),
        AttributeState::value("secret-abc"),
    );
    let factory = |resolved: ResolvedConfiguration| {
        Ok::<(String, String), String>((resolved.host.clone(), resolved.token.expose().to_string()))
    };

    let received = TodoProvider::new(TEST_VERSION)
        .configure(&config, &EnvironmentSnapshot::new(), &factory)
        .unwrap();

    assert_eq!(
        received,
        (String::from("https://api.example.com"), String::from("secret-abc"))
    );
}

/// **VALUE**: Gate 1 stops the cycle before the token is evaluated.
#[test]
fn given_unknown_host_and_concrete_token_when_configured_then_single_unknown_host_record() {
    let raw = json!({"host": {"unknown": true}, "token": "secret-abc"});

    let diagnostics = TodoProvider::new(TEST_VERSION)
        .configure_raw(&raw, &EnvironmentSnapshot::new(), &TodoClientFactory)
        .unwrap_err();

    assert_eq!(summaries(&diagnostics), ["Unknown TODO API Host"]);
}

#[test]
fn given_null_config_and_empty_env_when_configured_then_host_and_token_missing_in_order() {
    let environment = EnvironmentSnapshot::new()
        .with("TODO_HOST", "")
        .with("TODO_TOKEN", "");

    let diagnostics = TodoProvider::new(TEST_VERSION)
        .configure_raw(&json!({}), &environment, &TodoClientFactory)
        .unwrap_err();

    assert_eq!(
        summaries(&diagnostics),
        ["Missing TODO API Host", "Missing TODO API Token"]
    );
}

/// **VALUE**: A host the client cannot use becomes a client-construction diagnostic.
///
/// **BUG THIS CATCHES**: Would catch a panic or a missing diagnostic when the real factory
/// rejects resolved parameters.
#[test]
fn given_unusable_host_when_configured_with_real_factory_then_unable_to_create_client() {
    let raw = json!({"host": "not a url", "token": "secret-abc"});

    let diagnostics = TodoProvider::new(TEST_VERSION)
        .configure_raw(&raw, &EnvironmentSnapshot::new(), &TodoClientFactory)
        .unwrap_err();

    assert_eq!(summaries(&diagnostics), ["Unable to Create TODO API Client"]);
    let detail = diagnostics.as_slice()[0].detail();
    assert!(detail.contains("URL Parse Error"));
    assert!(!detail.contains("secret-abc"));
}
