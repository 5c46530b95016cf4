//! Decoding of the raw provider configuration object.
//!
//! The host runtime hands over a JSON object with one entry per attribute:
//!
//! - missing key or `null` decodes to [`AttributeState::Null`]
//! - a string decodes to [`AttributeState::Value`]
//! - the marker `{"unknown": true}` decodes to [`AttributeState::Unknown`]
//!
//! Anything else is a decode diagnostic. All decode problems are collected
//! before returning.

use crate::attribute::{AttributeState, ProviderAttribute};
use crate::diagnostics::{AttributePath, Diagnostics};
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

const UNKNOWN_MARKER_KEY: &str = "unknown";
const CONVERSION_ERROR_SUMMARY: &str = "Value Conversion Error";
const UNSUPPORTED_ARGUMENT_SUMMARY: &str = "Unsupported Argument";

/// Decoded provider configuration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub host: AttributeState,
    pub token: AttributeState,
}

impl ProviderConfig {
    pub fn new(host: AttributeState, token: AttributeState) -> Self {
        Self { host, token }
    }

    pub fn get(&self, attribute: ProviderAttribute) -> &AttributeState {
        match attribute {
            ProviderAttribute::Host => &self.host,
            ProviderAttribute::Token => &self.token,
        }
    }

    /// Decode a raw configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`Diagnostics`] for a non-object root, attributes of the wrong
    /// type, and unsupported keys.
    pub fn decode(raw: &Value) -> Result<Self, Diagnostics> {
        let mut diagnostics = Diagnostics::new();

        let object = match raw {
            Value::Object(object) => object,
            Value::Null => {
                debug!("Provider configuration is null, treating every attribute as unset");
                return Ok(Self::default());
            }
            other => {
                diagnostics.add_error(
                    CONVERSION_ERROR_SUMMARY,
                    format!(
                        "The provider configuration must be an object, got {}.",
                        json_type_name(other)
                    ),
                );
                return Err(diagnostics);
            }
        };

        let host = decode_attribute(object, ProviderAttribute::Host, &mut diagnostics);
        let token = decode_attribute(object, ProviderAttribute::Token, &mut diagnostics);

        for key in object.keys() {
            if ProviderAttribute::from_name(key).is_none() {
                diagnostics.add_attribute_error(
                    AttributePath::root(key.as_str()),
                    UNSUPPORTED_ARGUMENT_SUMMARY,
                    format!("An argument named \"{key}\" is not expected here."),
                );
            }
        }

        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        Ok(Self { host, token })
    }
}

// Token payload stays out of debug output.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("token", &format_args!("{}", self.token.kind()))
            .finish()
    }
}

fn decode_attribute(
    object: &Map<String, Value>,
    attribute: ProviderAttribute,
    diagnostics: &mut Diagnostics,
) -> AttributeState {
    match object.get(attribute.name()) {
        None | Some(Value::Null) => AttributeState::Null,
        Some(Value::String(value)) => AttributeState::Value(value.clone()),
        Some(Value::Object(marker)) if is_unknown_marker(marker) => AttributeState::Unknown,
        Some(other) => {
            diagnostics.add_attribute_error(
                attribute,
                CONVERSION_ERROR_SUMMARY,
                format!(
                    "Expected a string value for the {} attribute, got {}.",
                    attribute.name(),
                    json_type_name(other)
                ),
            );
            AttributeState::Null
        }
    }
}

fn is_unknown_marker(marker: &Map<String, Value>) -> bool {
    marker.len() == 1 && marker.get(UNKNOWN_MARKER_KEY) == Some(&Value::Bool(true))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

// ============================================
// RAW CONFIG LOADING
// ============================================

/// Parse raw configuration JSON. `origin` names the source in errors.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] for malformed JSON.
#[track_caller]
pub fn parse_raw(contents: &str, origin: &Path) -> Result<Value, ConfigError> {
    serde_json::from_str(contents).map_err(|e| ConfigError::ParseError {
        location: ErrorLocation::from(Location::caller()),
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read and parse a raw configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or is not valid JSON.
#[track_caller]
pub fn load_raw(path: &Path) -> Result<Value, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        location: ErrorLocation::from(Location::caller()),
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw = parse_raw(&contents, path)?;
    info!("Provider configuration loaded from {}", path.display());
    Ok(raw)
}
