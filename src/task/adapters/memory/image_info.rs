//! In-memory image information source.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{ImageInfoSource, ImageInfoSourceError, ImageInfoSourceResult};

/// Status reported for URIs with no registered document.
const NOT_FOUND_STATUS: u16 = 404;

/// Thread-safe image information source serving registered documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageInfoSource {
    state: Arc<RwLock<InMemoryImageInfoState>>,
}

#[derive(Debug, Default)]
struct InMemoryImageInfoState {
    documents: HashMap<String, Value>,
    requests: Vec<String>,
}

impl InMemoryImageInfoSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document and returns the source.
    #[must_use]
    pub fn with_document(self, uri: impl Into<String>, document: Value) -> Self {
        self.insert(uri, document);
        self
    }

    /// Registers or replaces the document served for `uri`.
    pub fn insert(&self, uri: impl Into<String>, document: Value) {
        if let Ok(mut state) = self.state.write() {
            state.documents.insert(uri.into(), document);
        }
    }

    /// Returns every URI requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ImageInfoSource for InMemoryImageInfoSource {
    async fn fetch(&self, uri: &str) -> ImageInfoSourceResult<Value> {
        let mut state = self.state.write().map_err(|err| {
            ImageInfoSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        state.requests.push(uri.to_owned());
        state
            .documents
            .get(uri)
            .cloned()
            .ok_or(ImageInfoSourceError::Status {
                status: NOT_FOUND_STATUS,
            })
    }
}
