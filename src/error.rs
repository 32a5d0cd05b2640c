use thiserror::Error;

use crate::config::ErrorKind;
use crate::response::{FailureInfo, FailureReason};
use crate::transport::{RawResponse, TransportError};

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// the transport call itself failed, propagated unmodified
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    /// status and content-type checks passed but the body is not valid JSON
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// outgoing body could not be encoded as JSON
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// failed response collapsed to its message
    #[error("{0}")]
    Simple(String),

    /// failed response with status text and the raw response attached;
    /// the response stays readable for header introspection
    #[error("{message}")]
    Full {
        message: String,
        status: String,
        response: Box<dyn RawResponse>,
    },
}

/// The single point where a classified failure becomes the configured error
/// representation.
pub(crate) fn from_failure(info: FailureInfo, kind: ErrorKind) -> ClientError {
    let message = match info.reason {
        FailureReason::InvalidContentType => "HTTP Error Invalid JSON response".to_string(),
        FailureReason::NotFound | FailureReason::Status => {
            format!("HTTP Error {} {}", info.status, info.status_text)
        }
    };
    match kind {
        ErrorKind::Simple => ClientError::Simple(message),
        ErrorKind::Full => ClientError::Full {
            message,
            status: info.status_text,
            response: info.response,
        },
    }
}
