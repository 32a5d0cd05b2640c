use std::fmt;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Error raised by a transport implementation. Opaque to the client core,
/// which propagates it unmodified.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(source.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request options handed to the transport.
#[derive(Clone, Debug)]
pub struct TransportOptions {
    pub method: Method,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
    /// fetch-style knobs (mode, cache, credentials, redirect, referrer),
    /// carried verbatim for transports that interpret them
    pub directives: IndexMap<String, String>,
}

/// A response as seen by the validation pipeline: status line, header
/// lookup, and a one-shot JSON body reader.
#[async_trait]
pub trait RawResponse: fmt::Debug + Send {
    fn status(&self) -> u16;

    fn status_text(&self) -> &str;

    /// case-insensitive
    fn has_header(&self, name: &str) -> bool;

    /// case-insensitive
    fn header(&self, name: &str) -> Option<&str>;

    /// Read and parse the body as JSON, consuming the response.
    async fn json(self: Box<Self>) -> Result<Value, TransportError>;
}

/// The injected capability performing the actual network call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        url: &str,
        options: TransportOptions,
    ) -> Result<Box<dyn RawResponse>, TransportError>;
}

/// Default transport backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport {
    http: reqwest::Client,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for FetchTransport {
    async fn send(
        &self,
        url: &str,
        options: TransportOptions,
    ) -> Result<Box<dyn RawResponse>, TransportError> {
        let mut request = self.http.request(options.method.into(), url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }
        // directives are fetch-level knobs; reqwest sets the equivalents
        // (redirect policy etc.) when the inner client is built, so they are
        // not applied per request here
        let response = request.send().await?;
        Ok(Box::new(FetchResponse { response }))
    }
}

#[derive(Debug)]
struct FetchResponse {
    response: reqwest::Response,
}

#[async_trait]
impl RawResponse for FetchResponse {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn status_text(&self) -> &str {
        self.response.status().canonical_reason().unwrap_or("")
    }

    fn has_header(&self, name: &str) -> bool {
        self.response.headers().contains_key(name)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    async fn json(self: Box<Self>) -> Result<Value, TransportError> {
        self.response.json().await.map_err(TransportError::from)
    }
}
