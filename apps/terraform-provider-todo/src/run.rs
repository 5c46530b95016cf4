//! One provider configuration run: read raw config, resolve, report.

use crate::error::ProviderAppError;

use common::ErrorLocation;
use provider_core::config::{load_raw, parse_raw};
use provider_core::{Diagnostics, Environment, TodoClient, TodoClientFactory, TodoProvider};

use std::io::Read;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde_json::Value;

/// Overrides the directory the log file is written to.
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";

/// Origin reported in parse errors when configuration comes from stdin.
pub const STDIN_ORIGIN: &str = "<stdin>";

#[cfg(debug_assertions)]
pub const PROVIDER_VERSION: &str = provider_core::provider::DEV_VERSION;

#[cfg(not(debug_assertions))]
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log directory from `TODO_LOG_DIR`, or the system temp directory.
pub fn log_dir<E: Environment + ?Sized>(environment: &E) -> PathBuf {
    let configured = environment.var(LOG_DIR_ENV);
    if configured.is_empty() {
        std::env::temp_dir()
    } else {
        PathBuf::from(configured)
    }
}

/// Read the raw configuration from `path`, or from `stdin` when no path is given.
///
/// # Errors
///
/// Returns [`ProviderAppError::Config`] if reading or JSON parsing fails.
pub fn read_raw_config(path: Option<&Path>, mut stdin: impl Read) -> Result<Value, ProviderAppError> {
    let raw = match path {
        Some(path) => load_raw(path),
        None => {
            let mut contents = String::new();
            stdin
                .read_to_string(&mut contents)
                .map_err(|e| ProviderAppError::Config {
                    message: format!("Failed to read configuration from stdin: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            parse_raw(&contents, Path::new(STDIN_ORIGIN))
        }
    };

    raw.map_err(|e| ProviderAppError::Config {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Resolve a raw configuration into a TODO API client.
pub fn configure<E: Environment + ?Sized>(
    raw: &Value,
    environment: &E,
) -> Result<TodoClient, Diagnostics> {
    let provider = TodoProvider::new(PROVIDER_VERSION);
    let metadata = provider.metadata();
    info!("Configuring {} provider version {}", metadata.type_name, metadata.version);

    let result = provider.configure_raw(raw, environment, &TodoClientFactory);
    match &result {
        Ok(client) => info!("TODO API client ready for {}", client.base_url()),
        Err(diagnostics) => {
            for diagnostic in diagnostics {
                warn!("{diagnostic}");
            }
        }
    }
    result
}

/// Render diagnostics as the pretty JSON array printed on stdout.
///
/// # Errors
///
/// Returns [`ProviderAppError::Output`] if serialization fails.
pub fn render_diagnostics(diagnostics: &Diagnostics) -> Result<String, ProviderAppError> {
    serde_json::to_string_pretty(diagnostics).map_err(|e| ProviderAppError::Output {
        message: format!("Failed to serialize diagnostics: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
