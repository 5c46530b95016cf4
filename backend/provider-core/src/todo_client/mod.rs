use crate::client_factory::ClientFactory;
use crate::configure::ResolvedConfiguration;
use crate::error::todo_client::TodoClientError;

use common::{ErrorLocation, RedactedToken};

use std::fmt;
use std::panic::Location;
use std::time::Duration;

use log::info;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Handle to the TODO API shared by resources and data sources.
///
/// Building one performs no network I/O. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct TodoClient {
    base_url: Url,
    client: Client,
}

impl TodoClient {
    /// Build a client for `host` authenticating with a bearer `token`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoClientError`] if `host` is not an absolute URL, the token
    /// is not a valid header value, or the HTTP client cannot be built.
    pub fn new(host: &str, token: &RedactedToken) -> Result<Self, TodoClientError> {
        let base_url = Url::parse(host)?;

        let mut authorization = HeaderValue::try_from(format!("Bearer {}", token.expose()))
            .map_err(|_| TodoClientError::InvalidToken {
                message: format!(
                    "token ({} chars) contains characters not allowed in an HTTP header",
                    token.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an API path relative to the host.
    pub fn endpoint(&self, path: &str) -> Result<Url, TodoClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Underlying HTTP client with authentication already applied.
    pub fn http(&self) -> &Client {
        &self.client
    }
}

impl fmt::Debug for TodoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Factory producing [`TodoClient`]s from resolved configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoClientFactory;

impl ClientFactory for TodoClientFactory {
    type Client = TodoClient;
    type Error = TodoClientError;

    fn create_client(&self, config: ResolvedConfiguration) -> Result<TodoClient, TodoClientError> {
        let client = TodoClient::new(&config.host, &config.token)?;
        info!("Created TODO API client for {}", client.base_url());
        Ok(client)
    }
}
