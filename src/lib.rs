//! Configurable JSON HTTP client over a pluggable transport.
//!
//! [`Client`] composes request URLs from a base URL, sends JSON bodies, and
//! validates every response through one pipeline before parsing. The network
//! call itself is behind the [`Transport`] trait; a reqwest-backed
//! [`FetchTransport`] is the default.

mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod transport;
pub mod url;

pub use client::Client;
pub use config::{ClientConfig, ClientOptions, ErrorKind};
pub use error::{ClientError, Result};
pub use transport::{FetchTransport, Method, Transport};
