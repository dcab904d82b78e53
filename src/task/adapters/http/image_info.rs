//! HTTP image information source.
//!
//! Issues a single `GET` per request and decodes the body as JSON.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::task::ports::{ImageInfoSource, ImageInfoSourceError, ImageInfoSourceResult};

/// Media types accepted for IIIF image information documents.
const IMAGE_INFO_ACCEPT: &str = "application/ld+json, application/json;q=0.9";

/// Default user agent sent with image information requests.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`HttpImageInfoSource`].
///
/// # Examples
///
/// ```
/// use iiif_annotation::task::adapters::http::HttpImageInfoConfig;
/// use std::time::Duration;
///
/// let config = HttpImageInfoConfig::default();
/// assert!(config.timeout.is_none());
///
/// let bounded = HttpImageInfoConfig::default().with_timeout(Duration::from_secs(10));
/// assert_eq!(bounded.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpImageInfoConfig {
    /// Whole-request timeout; `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for HttpImageInfoConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpImageInfoConfig {
    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Image information source retrieving documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpImageInfoSource {
    client: reqwest::Client,
}

impl HttpImageInfoSource {
    /// Creates a source with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`ImageInfoSourceError::Transport`] when the HTTP client
    /// cannot be initialised.
    pub fn new(config: &HttpImageInfoConfig) -> ImageInfoSourceResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ImageInfoSourceError::transport)?;
        Ok(Self { client })
    }

    /// Creates a source reusing an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageInfoSource for HttpImageInfoSource {
    async fn fetch(&self, uri: &str) -> ImageInfoSourceResult<Value> {
        let response = self
            .client
            .get(uri)
            .header(ACCEPT, IMAGE_INFO_ACCEPT)
            .send()
            .await
            .map_err(ImageInfoSourceError::transport)?;

        let status = response.status();
        debug!(uri, status = status.as_u16(), "image info response received");
        if !status.is_success() {
            return Err(ImageInfoSourceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(ImageInfoSourceError::decode)
    }
}
