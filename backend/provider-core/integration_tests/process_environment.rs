use provider_core::{ProcessEnvironment, ProviderConfig, TodoClientFactory, TodoProvider};

use serial_test::serial;

// ============================================================================
// Resolution against the live process environment
// ============================================================================

fn set_env(host: Option<&str>, token: Option<&str>) {
    for (name, value) in [("TODO_HOST", host), ("TODO_TOKEN", token)] {
        match value {
            Some(value) => unsafe { std::env::set_var(name, value) },
            None => unsafe { std::env::remove_var(name) },
        }
    }
}

/// **VALUE**: Null configuration falls back to TODO_HOST / TODO_TOKEN in the process.
#[test]
#[serial]
fn given_process_env_set_when_configured_then_client_uses_env_host() {
    // GIVEN: Both variables exported
    set_env(Some("https://env.example.com"), Some("env-token"));

    // WHEN: Configuring with null attributes
    let result = TodoProvider::new("test").configure(
        &ProviderConfig::default(),
        &ProcessEnvironment,
        &TodoClientFactory,
    );

    // THEN: Client targets the environment host
    set_env(None, None);
    assert_eq!(result.unwrap().base_url().host_str(), Some("env.example.com"));
}

/// **VALUE**: Unset variables read as empty and are reported missing, not as errors.
#[test]
#[serial]
fn given_process_env_unset_when_configured_then_both_missing() {
    set_env(None, None);

    let diagnostics = TodoProvider::new("test")
        .configure(&ProviderConfig::default(), &ProcessEnvironment, &TodoClientFactory)
        .unwrap_err();

    assert_eq!(diagnostics.len(), 2);
}
