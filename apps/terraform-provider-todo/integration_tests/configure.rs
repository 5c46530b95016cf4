use provider_core::EnvironmentSnapshot;

use terraform_provider_todo::run::{configure, read_raw_config, render_diagnostics};

// ============================================================================
// Integration tests for the binary's configure flow
// These exercise provider-core through the same path main() uses
// ============================================================================

/// **VALUE**: A config file plus environment defaults yields a ready client.
///
/// **WHY THIS MATTERS**: This is the closest we get to an end-to-end run without a host
/// runtime: file decoding, precedence and the real TODO API client factory together.
#[test]
fn given_config_file_and_env_token_when_configured_then_client_ready() {
    // GIVEN: A config file with the host only and TODO_TOKEN in the environment
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provider.json");
    std::fs::write(&path, r#"{"host": "https://api.example.com", "token": null}"#).unwrap();
    let environment = EnvironmentSnapshot::new().with("TODO_TOKEN", "env-token");

    // WHEN: Reading and configuring
    let raw = read_raw_config(Some(path.as_path()), std::io::empty()).unwrap();
    let client = configure(&raw, &environment);

    // THEN: The client targets the configured host
    assert_eq!(client.unwrap().base_url().as_str(), "https://api.example.com/");
}

/// **VALUE**: Every diagnostic reaches the rendered output, not just the first.
#[test]
fn given_empty_config_and_env_when_configured_then_rendered_output_lists_all_records() {
    let raw = read_raw_config(None, b"{}".as_slice()).unwrap();

    let diagnostics = configure(&raw, &EnvironmentSnapshot::new()).unwrap_err();
    let rendered = render_diagnostics(&diagnostics).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let summaries: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["summary"].as_str().unwrap())
        .collect();
    assert_eq!(summaries, ["Missing TODO API Host", "Missing TODO API Token"]);
}
