//! Provider configuration: validation, precedence resolution and client construction.
//!
//! One call to [`ConfigureService::configure`] is one resolution cycle:
//!
//! ```text
//! Start -> ValidatingUnknown -> ResolvingValues -> ConstructingClient -> Ready
//!                 |                   |                    |
//!                 +-------------------+--------------------+--> Failed
//! ```
//!
//! Each phase checks every attribute before its gate, so all problems of
//! that phase are reported together. A later phase never runs once an
//! earlier one recorded a diagnostic.

use crate::API_NAME;
use crate::attribute::{AttributeState, ProviderAttribute};
use crate::client_factory::ClientFactory;
use crate::config::ProviderConfig;
use crate::diagnostics::Diagnostics;
use crate::environment::Environment;
use crate::precedence::resolve;

use common::RedactedToken;

use std::fmt;

use log::{debug, info, warn};

const CLIENT_ERROR_SUMMARY: &str = const_format::concatcp!("Unable to Create ", API_NAME, " Client");

/// Fully resolved connection parameters.
///
/// Only built when no diagnostic was recorded; moved into the client factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub host: String,
    pub token: RedactedToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ValidatingUnknown,
    ResolvingValues,
    ConstructingClient,
    Ready,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::ValidatingUnknown => "validating unknown values",
            Phase::ResolvingValues => "resolving values",
            Phase::ConstructingClient => "constructing client",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs resolution cycles against an environment and a client factory.
///
/// Holds no per-cycle state, so one service may serve any number of cycles.
pub struct ConfigureService<'a, E: ?Sized, F> {
    environment: &'a E,
    factory: &'a F,
}

impl<'a, E, F> ConfigureService<'a, E, F>
where
    E: Environment + ?Sized,
    F: ClientFactory,
{
    pub fn new(environment: &'a E, factory: &'a F) -> Self {
        Self {
            environment,
            factory,
        }
    }

    /// Resolve `config` into a client handle.
    ///
    /// # Errors
    ///
    /// Returns every accumulated [`Diagnostics`] record when an attribute is
    /// unknown, an effective value is empty, or the factory fails. Records
    /// are ordered by phase, then by attribute declaration order.
    pub fn configure(&self, config: &ProviderConfig) -> Result<F::Client, Diagnostics> {
        let mut diagnostics = Diagnostics::new();

        enter(Phase::ValidatingUnknown);
        for attribute in ProviderAttribute::ALL {
            validate_known(attribute, config.get(attribute), &mut diagnostics);
        }

        // Gate 1: an unknown value cannot be combined with an environment default
        if diagnostics.has_error() {
            return Err(fail(diagnostics));
        }

        enter(Phase::ResolvingValues);
        let host = self.resolve_attribute(ProviderAttribute::Host, &config.host, &mut diagnostics);
        let token = self.resolve_attribute(ProviderAttribute::Token, &config.token, &mut diagnostics);

        // Gate 2
        let resolved = match (host, token) {
            (Some(host), Some(token)) if !diagnostics.has_error() => ResolvedConfiguration {
                host,
                token: RedactedToken::new(token),
            },
            _ => return Err(fail(diagnostics)),
        };

        enter(Phase::ConstructingClient);
        match self.factory.create_client(resolved) {
            Ok(client) => {
                enter(Phase::Ready);
                info!("{API_NAME} client configured");
                Ok(client)
            }
            Err(e) => {
                diagnostics.add_error(
                    CLIENT_ERROR_SUMMARY,
                    format!(
                        "An unexpected error occurred when creating the {API_NAME} client. \
                         If the error is not clear, please contact the provider developers.\n\n\
                         TODO Client Error: {e}"
                    ),
                );
                Err(fail(diagnostics))
            }
        }
    }

    /// Effective value of one attribute, or `None` after recording it as missing.
    fn resolve_attribute(
        &self,
        attribute: ProviderAttribute,
        state: &AttributeState,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        let env_var = attribute.env_var();
        let resolved = resolve(state, self.environment.var(env_var), env_var);

        if resolved.is_empty() {
            let label = attribute.label();
            diagnostics.add_attribute_error(
                attribute,
                format!("Missing {API_NAME} {label}"),
                format!(
                    "The provider cannot create the {API_NAME} client as there is a missing or empty \
                     value for the {API_NAME} {}. Set the {} value in the configuration or use the \
                     {env_var} environment variable. If either is already set, ensure the value is not empty.",
                    attribute.name(),
                    attribute.name(),
                ),
            );
            return None;
        }

        if attribute.is_sensitive() {
            debug!(
                "Resolved {} from {} ({} chars)",
                attribute,
                resolved.source,
                resolved.value.len()
            );
        } else {
            debug!("Resolved {} from {}: {}", attribute, resolved.source, resolved.value);
        }

        Some(resolved.value)
    }
}

/// Run one resolution cycle with a throwaway service.
pub fn configure<E, F>(
    config: &ProviderConfig,
    environment: &E,
    factory: &F,
) -> Result<F::Client, Diagnostics>
where
    E: Environment + ?Sized,
    F: ClientFactory,
{
    ConfigureService::new(environment, factory).configure(config)
}

fn validate_known(attribute: ProviderAttribute, state: &AttributeState, diagnostics: &mut Diagnostics) {
    if !state.is_unknown() {
        return;
    }

    let label = attribute.label();
    diagnostics.add_attribute_error(
        attribute,
        format!("Unknown {API_NAME} {label}"),
        format!(
            "The provider cannot create the {API_NAME} client as there is an unknown configuration \
             value for the {API_NAME} {}. Either target apply the source of the value first, set \
             the value statically in the configuration, or use the {} environment variable.",
            attribute.name(),
            attribute.env_var(),
        ),
    );
}

fn enter(phase: Phase) {
    debug!("Provider configuration: {phase}");
}

fn fail(diagnostics: Diagnostics) -> Diagnostics {
    enter(Phase::Failed);
    warn!(
        "Provider configuration failed with {} diagnostic(s)",
        diagnostics.len()
    );
    diagnostics
}
