use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{self, ClientConfig, ClientOptions};
use crate::error::{self, ClientError, Result};
use crate::response::{self, FailureReason, ResponseOutcome};
use crate::transport::{FetchTransport, Method, Transport, TransportOptions};
use crate::url;

/// JSON HTTP client over an injected transport.
///
/// Cheap to clone; in-flight calls share only the read-only config and the
/// transport handle.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client over the default reqwest-backed transport.
    pub fn new(base_url: impl Into<String>, options: ClientOptions) -> Self {
        Self::with_transport(base_url, options, Arc::new(FetchTransport::new()))
    }

    pub fn with_transport(
        base_url: impl Into<String>,
        options: ClientOptions,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let defaults = ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        };
        let config = config::merge(defaults, &options);
        if config.base_url.is_empty() {
            warn!("missing base url");
        }
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(&self, uri: &str, query: &[(&str, &str)]) -> Result<Option<Value>> {
        self.dispatch::<Value>(Method::Get, uri, None, query).await
    }

    pub async fn post<T>(
        &self,
        uri: &str,
        data: Option<&T>,
        query: &[(&str, &str)],
    ) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        self.dispatch(Method::Post, uri, data, query).await
    }

    pub async fn put<T>(
        &self,
        uri: &str,
        data: Option<&T>,
        query: &[(&str, &str)],
    ) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        self.dispatch(Method::Put, uri, data, query).await
    }

    pub async fn remove(&self, uri: &str, query: &[(&str, &str)]) -> Result<Option<Value>> {
        self.dispatch::<Value>(Method::Delete, uri, None, query)
            .await
    }

    /// Runs one request through the full pipeline. `Ok(None)` is a 204.
    async fn dispatch<T>(
        &self,
        method: Method,
        uri: &str,
        data: Option<&T>,
        query: &[(&str, &str)],
    ) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let url = url::build(&self.config.base_url, uri, query);

        let body = match data {
            Some(data) => Some(
                serde_json::to_string(data)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        if self.config.verbose {
            info!(
                method = %method,
                url = %url,
                body = ?body,
                query = ?query,
                "dispatch request"
            );
        }

        let options = TransportOptions {
            method,
            headers: self.config.transport.headers.clone(),
            body,
            directives: self.config.transport.directives.clone(),
        };

        let response = self.transport.send(&url, options).await?;

        match response::validate(response) {
            ResponseOutcome::NoContent => Ok(None),
            ResponseOutcome::Parse(response) => {
                let value = response
                    .json()
                    .await
                    .map_err(|e| ClientError::Deserialization(e.to_string()))?;
                Ok(Some(value))
            }
            ResponseOutcome::Failure(info) => {
                if info.reason == FailureReason::NotFound {
                    debug!(method = %method, url = %url, "resource not found");
                }
                Err(error::from_failure(info, self.config.error_kind))
            }
        }
    }
}
