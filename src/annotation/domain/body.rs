//! Annotation body records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of plain-text bodies.
pub const TEXT_PLAIN: &str = "text/plain";

/// Kind of resource an annotation body is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    /// Text embedded directly in the annotation.
    TextualBody,
}

impl BodyType {
    /// Returns the Web Annotation type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextualBody => "TextualBody",
        }
    }
}

/// Role a body plays within its annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// A comment about the target.
    Commenting,
    /// A description of the target.
    Describing,
    /// A tag applied to the target.
    Tagging,
    /// A classification of the target.
    Classifying,
    /// A transcription of text in the target.
    Transcribing,
}

impl Purpose {
    /// Returns the Web Annotation purpose name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commenting => "commenting",
            Self::Describing => "describing",
            Self::Tagging => "tagging",
            Self::Classifying => "classifying",
            Self::Transcribing => "transcribing",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single body record: `{type, value, purpose, format}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Body {
    /// Resource kind.
    #[serde(rename = "type")]
    pub body_type: BodyType,
    /// Body content.
    pub value: String,
    /// Role of the body.
    pub purpose: Purpose,
    /// Media type of `value`.
    pub format: String,
}

impl Body {
    /// Creates a plain-text body with the given purpose.
    #[must_use]
    pub fn text(value: impl Into<String>, purpose: Purpose) -> Self {
        Self {
            body_type: BodyType::TextualBody,
            value: value.into(),
            purpose,
            format: TEXT_PLAIN.to_owned(),
        }
    }
}
