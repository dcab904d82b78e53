//! Retrieval port for IIIF image information documents.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image information retrieval.
pub type ImageInfoSourceResult<T> = Result<T, ImageInfoSourceError>;

/// Retrieval of IIIF image information documents.
///
/// Implementations perform a single attempt per call. Retries, timeouts and
/// caching are layered by callers that need them.
#[async_trait]
pub trait ImageInfoSource: Send + Sync {
    /// Retrieves and decodes the JSON document at `uri`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageInfoSourceError::Transport`] when the request fails,
    /// [`ImageInfoSourceError::Status`] for a non-success response and
    /// [`ImageInfoSourceError::Decode`] when the body is not JSON.
    async fn fetch(&self, uri: &str) -> ImageInfoSourceResult<Value>;
}

/// Errors returned by image information sources.
#[derive(Debug, Clone, Error)]
pub enum ImageInfoSourceError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not a JSON document.
    #[error("decode error: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImageInfoSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
