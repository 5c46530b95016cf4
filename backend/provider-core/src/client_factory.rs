//! Construction of the API client from resolved configuration.

use crate::configure::ResolvedConfiguration;

use std::fmt::Display;

/// Builds a client handle from resolved configuration, or fails with a
/// description that ends up in the practitioner-facing diagnostic.
///
/// Any `Fn(ResolvedConfiguration) -> Result<C, E>` is a factory too.
pub trait ClientFactory {
    type Client;
    type Error: Display;

    fn create_client(&self, config: ResolvedConfiguration) -> Result<Self::Client, Self::Error>;
}

impl<F, C, E> ClientFactory for F
where
    F: Fn(ResolvedConfiguration) -> Result<C, E>,
    E: Display,
{
    type Client = C;
    type Error = E;

    fn create_client(&self, config: ResolvedConfiguration) -> Result<C, E> {
        self(config)
    }
}
