//! Identifier types for annotations.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix used when rendering an annotation identifier as an IRI.
const URN_UUID_PREFIX: &str = "urn:uuid:";

/// Unique identifier for an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(Uuid);

impl AnnotationId {
    /// Creates a new random annotation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an annotation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns the identifier as a `urn:uuid:` IRI.
    #[must_use]
    pub fn to_iri(&self) -> String {
        format!("{URN_UUID_PREFIX}{}", self.0)
    }

    /// Parses an identifier from either a bare UUID or a `urn:uuid:` IRI.
    ///
    /// Returns `None` when the value is not a UUID.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let raw = trimmed.strip_prefix(URN_UUID_PREFIX).unwrap_or(trimmed);
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for AnnotationId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for AnnotationId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
