// Unit tests for RedactedToken
// Tests that the token value never leaks through formatting or serialization

use crate::RedactedToken;

/// **VALUE**: Verifies Debug output never contains the token value.
///
/// **WHY THIS MATTERS**: Resolved configuration structs derive Debug. A `{:?}` in a log
/// line would otherwise print the API token in clear text.
///
/// **BUG THIS CATCHES**: Would catch if someone replaces the manual Debug impl with a derive.
#[test]
fn given_token_when_debug_formatted_then_value_is_redacted() {
    // GIVEN: A token with a recognisable value
    let token = RedactedToken::new("secret-abc");

    // WHEN: Debug formatting (including pretty and nested)
    let debug = format!("{:?}", token);
    let nested = format!("{:#?}", Some(token.clone()));

    // THEN: The secret never appears
    assert!(!debug.contains("secret-abc"));
    assert!(!nested.contains("secret-abc"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_when_display_formatted_then_value_is_redacted() {
    let token = RedactedToken::new("secret-abc");

    assert_eq!(token.to_string(), "[REDACTED TOKEN]");
}

/// **VALUE**: Verifies serialization is refused rather than silently emitting the token.
///
/// **BUG THIS CATCHES**: Would catch if a `#[derive(Serialize)]` sneaks onto the type,
/// letting diagnostics or JSON output carry the raw token.
#[test]
fn given_token_when_serialized_then_returns_error() {
    // GIVEN: A token
    let token = RedactedToken::new("secret-abc");

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&token);

    // THEN: Serialization fails and the error text does not echo the value
    let err = result.expect_err("RedactedToken must not serialize");
    assert!(err.to_string().contains("cannot be serialized"));
    assert!(!err.to_string().contains("secret-abc"));
}

#[test]
fn given_token_when_exposed_then_returns_original_value_and_length() {
    let token = RedactedToken::from(String::from("secret-abc"));

    assert_eq!(token.expose(), "secret-abc");
    assert_eq!(token.len(), 10);
    assert!(!token.is_empty());
    assert!(RedactedToken::new("").is_empty());
}
