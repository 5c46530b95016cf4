//! Environment variable access for attribute defaults.
//!
//! # Features
//! - `Environment` trait so resolution can run against a fixed snapshot
//! - Process environment reader where absence reads as `""`
//! - `.env` loading from cwd or executable directory
//!
//! Values already set in the process environment are never overridden by
//! a `.env` file.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Source of environment values.
pub trait Environment {
    /// Value of `name`, or `""` when unset.
    fn var(&self, name: &str) -> String;
}

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> String {
        match env::var(name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => {
                debug!("No {} env var found", name);
                String::new()
            }
            Err(env::VarError::NotUnicode(_)) => {
                warn!("Env var {} contains invalid unicode, treating as unset", name);
                String::new()
            }
        }
    }
}

/// A fixed set of environment values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    values: HashMap<String, String>,
}

impl EnvironmentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the given variables from the process environment.
    pub fn capture<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .map(|name| (name.to_string(), ProcessEnvironment.var(name)))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Environment for EnvironmentSnapshot {
    fn var(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> String {
        (**self).var(name)
    }
}

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to loaded .env file, if found.
    pub path: Option<PathBuf>,
    /// Whether any .env file was loaded.
    pub loaded: bool,
}

/// Attempts to load .env from known locations.
///
/// Tries the current directory first, then the executable's directory.
/// A missing file is not an error.
pub fn load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(()) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    debug!("No .env file found - using existing environment variables");
    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
