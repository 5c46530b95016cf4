pub mod attribute;
pub mod client_factory;
pub mod config;
pub mod configure;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod precedence;
pub mod provider;
pub mod todo_client;

#[cfg(test)]
mod tests;

pub use attribute::{AttributeState, ProviderAttribute};
pub use client_factory::ClientFactory;
pub use config::ProviderConfig;
pub use configure::{ConfigureService, ResolvedConfiguration};
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics};
pub use environment::{Environment, EnvironmentSnapshot, ProcessEnvironment};
pub use provider::TodoProvider;
pub use todo_client::{TodoClient, TodoClientFactory};

pub const PROVIDER_TYPE_NAME: &str = "todo";
pub const API_NAME: &str = "TODO API";
pub const ENV_PREFIX: &str = "TODO_";
pub const TODO_HOST_ENV: &str = const_format::concatcp!(ENV_PREFIX, "HOST");
pub const TODO_TOKEN_ENV: &str = const_format::concatcp!(ENV_PREFIX, "TOKEN");
