// Unit tests for precedence resolution

use crate::attribute::AttributeState;
use crate::precedence::{ValueSource, resolve};

const ENV_VAR: &str = "TODO_HOST";

/// **VALUE**: Concrete configuration always wins over the environment.
///
/// **BUG THIS CATCHES**: Would catch an inverted precedence where a stale TODO_HOST
/// silently replaces the host the practitioner wrote in configuration.
#[test]
fn given_concrete_value_when_resolved_then_configuration_wins_over_any_environment() {
    for environment_value in ["", "https://env.example.com"] {
        // GIVEN: A concrete configuration value and any environment value
        let state = AttributeState::value("X");

        // WHEN: Resolving
        let resolved = resolve(&state, environment_value.to_string(), ENV_VAR);

        // THEN: The configuration value is effective
        assert_eq!(resolved.value, "X");
        assert_eq!(resolved.source, ValueSource::Configuration);
    }
}

#[test]
fn given_null_state_when_resolved_then_environment_default_is_used() {
    let resolved = resolve(&AttributeState::Null, String::from("Y"), ENV_VAR);

    assert_eq!(resolved.value, "Y");
    assert_eq!(resolved.source, ValueSource::Environment("TODO_HOST"));
}

#[test]
fn given_null_state_and_empty_environment_when_resolved_then_value_is_empty() {
    let resolved = resolve(&AttributeState::Null, String::new(), ENV_VAR);

    assert!(resolved.is_empty());
}

/// **VALUE**: An explicit empty configuration value still overrides the environment.
///
/// **WHY THIS MATTERS**: Explicit `""` and "not set" both end up reported as missing.
/// This documents that collapse so it is not changed by accident.
#[test]
fn given_explicit_empty_value_when_resolved_then_overrides_environment_with_empty() {
    let resolved = resolve(&AttributeState::value(""), String::from("Y"), ENV_VAR);

    assert!(resolved.is_empty());
    assert_eq!(resolved.source, ValueSource::Configuration);
}

#[test]
fn given_value_source_when_displayed_then_names_origin() {
    assert_eq!(ValueSource::Configuration.to_string(), "configuration");
    assert_eq!(ValueSource::Environment("TODO_TOKEN").to_string(), "env:TODO_TOKEN");
}
