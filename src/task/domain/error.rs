//! Error types for task construction, form validation and task operations.

use crate::annotation::domain::{AnnotationError, AnnotationId};
use crate::task::ports::ImageInfoSourceError;
use thiserror::Error;

/// Errors returned while constructing a task.
///
/// Each variant names the construction rule that failed. Rules are checked
/// in declaration order and the first failure is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// No mode was supplied.
    #[error("mode is required")]
    MissingMode,

    /// The mode is not part of the supported vocabulary.
    #[error("mode must be one of select, transcribe (got '{0}')")]
    InvalidMode(String),

    /// No image information URI was supplied.
    #[error("imgInfoUri is required")]
    MissingImageInfoUri,

    /// Select mode was requested without a tag.
    #[error("tag is required when in select mode")]
    MissingSelectTag,

    /// The transcription form descriptor was rejected.
    #[error("invalid transcription form: {0}")]
    InvalidForm(#[from] FormError),

    /// The initial annotations contain the same identifier twice.
    #[error("duplicate annotation identifier: {0}")]
    DuplicateAnnotation(AnnotationId),
}

/// Errors returned while validating a transcription form descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// No descriptor was supplied.
    #[error("form is required")]
    Missing,

    /// The descriptor is not a JSON object.
    #[error("form must be an object")]
    NotAnObject,

    /// The descriptor has no `model` object.
    #[error("form model is required")]
    MissingModel,

    /// The descriptor has no `schema` object.
    #[error("form schema is required")]
    MissingSchema,

    /// `schema.fields` is absent or not a list.
    #[error("form schema fields must be a list")]
    InvalidFields,

    /// `schema.fields` is empty.
    #[error("form schema must define at least one field")]
    NoFields,

    /// A schema field does not name a model key.
    #[error("form field {0} has no model key")]
    FieldWithoutModel(usize),

    /// A schema field names a key missing from the model.
    #[error("form field references unknown model key '{0}'")]
    UnknownModelKey(String),
}

/// Errors returned by task operations after construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    /// No annotation exists with the given identifier.
    #[error("no annotation exists with ID {0}")]
    AnnotationNotFound(AnnotationId),

    /// An annotation with the same identifier is already held by the task.
    #[error("duplicate annotation identifier: {0}")]
    DuplicateAnnotation(AnnotationId),

    /// An overlay identifier is empty after trimming.
    #[error("overlay identifier must not be empty")]
    EmptyOverlayId,
}

/// Errors returned while retrieving the task's image information.
#[derive(Debug, Clone, Error)]
pub enum ImageInfoError {
    /// The document could not be retrieved or decoded.
    #[error("could not retrieve image info from {uri}: {source}")]
    Retrieval {
        /// URI that was requested.
        uri: String,
        /// Underlying retrieval failure.
        #[source]
        source: ImageInfoSourceError,
    },

    /// The document was retrieved but is not usable image information.
    #[error("invalid image info from {uri}: {source}")]
    Invalid {
        /// URI that was requested.
        uri: String,
        /// Underlying validation failure.
        #[source]
        source: AnnotationError,
    },
}

impl ImageInfoError {
    /// Returns the URI the failed retrieval targeted.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Retrieval { uri, .. } | Self::Invalid { uri, .. } => uri,
        }
    }
}
