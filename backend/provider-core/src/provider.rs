//! The TODO provider as seen by the host runtime.
//!
//! Metadata, schema and the (empty) resource and data-source registries are
//! plain declarations; [`TodoProvider::configure`] is where resolution runs.

use crate::PROVIDER_TYPE_NAME;
use crate::attribute::ProviderAttribute;
use crate::client_factory::ClientFactory;
use crate::config::ProviderConfig;
use crate::configure::ConfigureService;
use crate::diagnostics::Diagnostics;
use crate::environment::Environment;
use crate::todo_client::TodoClient;

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Version reported by locally built providers.
pub const DEV_VERSION: &str = "dev";
/// Version reported while running acceptance tests.
pub const TEST_VERSION: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaAttribute {
    pub name: &'static str,
    pub optional: bool,
    pub sensitive: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    /// In declaration order.
    pub attributes: Vec<SchemaAttribute>,
}

impl ProviderSchema {
    pub fn attribute(&self, name: &str) -> Option<&SchemaAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A data source served by the provider.
pub trait DataSource {
    fn type_name(&self) -> String;
    /// Receives the shared client once provider configuration succeeded.
    fn configure(&mut self, client: TodoClient);
}

/// A managed resource served by the provider.
pub trait Resource {
    fn type_name(&self) -> String;
    /// Receives the shared client once provider configuration succeeded.
    fn configure(&mut self, client: TodoClient);
}

pub type DataSourceConstructor = fn() -> Box<dyn DataSource>;
pub type ResourceConstructor = fn() -> Box<dyn Resource>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoProvider {
    /// "dev" for local builds, "test" in acceptance tests, the release
    /// version otherwise.
    version: String,
}

impl TodoProvider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    pub fn schema(&self) -> ProviderSchema {
        let attributes = ProviderAttribute::ALL
            .into_iter()
            .map(|attribute| SchemaAttribute {
                name: attribute.name(),
                optional: true,
                sensitive: attribute.is_sensitive(),
                description: match attribute {
                    ProviderAttribute::Host => {
                        "URI of the TODO API. May also be provided via the TODO_HOST environment variable."
                    }
                    ProviderAttribute::Token => {
                        "Token for the TODO API. May also be provided via the TODO_TOKEN environment variable."
                    }
                },
            })
            .collect();

        ProviderSchema { attributes }
    }

    /// Resolve a decoded configuration into a client handle.
    pub fn configure<E, F>(
        &self,
        config: &ProviderConfig,
        environment: &E,
        factory: &F,
    ) -> Result<F::Client, Diagnostics>
    where
        E: Environment + ?Sized,
        F: ClientFactory,
    {
        debug!("Configuring {} provider {}: {:?}", PROVIDER_TYPE_NAME, self.version, config);
        ConfigureService::new(environment, factory).configure(config)
    }

    /// Decode a raw configuration object, then configure.
    ///
    /// Decode diagnostics stop the cycle before any attribute is validated.
    pub fn configure_raw<E, F>(
        &self,
        raw: &Value,
        environment: &E,
        factory: &F,
    ) -> Result<F::Client, Diagnostics>
    where
        E: Environment + ?Sized,
        F: ClientFactory,
    {
        let config = ProviderConfig::decode(raw)?;
        self.configure(&config, environment, factory)
    }

    pub fn data_sources(&self) -> Vec<DataSourceConstructor> {
        Vec::new()
    }

    pub fn resources(&self) -> Vec<ResourceConstructor> {
        Vec::new()
    }
}
