use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors that end a provider process run.
///
/// Serializable so they can be reported in the same JSON stream as diagnostics.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ProviderAppError {
    /// Logger or filesystem setup failed
    #[error("Setup Error: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },

    /// Raw configuration could not be read or parsed
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration resolution produced diagnostics
    #[error("Configure Error: {message} {location}")]
    Configure {
        message: String,
        location: ErrorLocation,
    },

    /// Output could not be written
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}
