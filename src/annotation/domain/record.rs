//! Web Annotation JSON rendering.

use super::{Agent, Annotation, Body, MEDIA_FRAGMENTS_SPEC, Motivation, Tag, Target};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// JSON-LD context of the Web Annotation vocabulary.
pub const WEB_ANNOTATION_CONTEXT: &str = "http://www.w3.org/ns/anno.jsonld";

/// Serialisable Web Annotation record.
///
/// # Serialisation
///
/// ```json
/// {
///   "@context": "http://www.w3.org/ns/anno.jsonld",
///   "id": "urn:uuid:...",
///   "type": "Annotation",
///   "motivation": "describing",
///   "created": "2024-01-01T00:00:00Z",
///   "body": [{ "type": "TextualBody", "value": "...", "purpose": "describing", "format": "text/plain" }],
///   "target": { "source": "https://example.org/iiif/image" },
///   "tags": [{ "tag": "architecture", "fragmentURI": "xywh=10,10,50,50" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Annotation IRI.
    pub id: String,
    /// Always `Annotation`.
    #[serde(rename = "type")]
    pub annotation_type: &'static str,
    /// Annotation motivation.
    pub motivation: Motivation,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Generation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<DateTime<Utc>>,
    /// Creator attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Agent>,
    /// Generator attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Agent>,
    /// Bodies in insertion order.
    pub body: Vec<Body>,
    /// Annotation target.
    pub target: TargetRecord,
    /// Tags, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRecord>,
    /// Classification, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

/// Serialisable annotation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRecord {
    /// Image service identifier.
    pub source: String,
    /// Fragment selector, omitted for whole-image targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorRecord>,
}

/// Serialisable fragment selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorRecord {
    /// Always `FragmentSelector`.
    #[serde(rename = "type")]
    pub selector_type: &'static str,
    /// Specification the value conforms to.
    #[serde(rename = "conformsTo")]
    pub conforms_to: &'static str,
    /// Media fragment, e.g. `xywh=10,10,50,50`.
    pub value: String,
}

/// Serialisable tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRecord {
    /// Tag value.
    pub tag: String,
    /// Media fragment the tag is scoped to.
    #[serde(rename = "fragmentURI", skip_serializing_if = "Option::is_none")]
    pub fragment_uri: Option<String>,
}

impl AnnotationRecord {
    /// Converts the record into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<&Annotation> for AnnotationRecord {
    fn from(annotation: &Annotation) -> Self {
        Self {
            context: WEB_ANNOTATION_CONTEXT,
            id: annotation.id().to_iri(),
            annotation_type: "Annotation",
            motivation: annotation.motivation(),
            created: annotation.created(),
            generated: annotation.generated(),
            creator: annotation.creator().cloned(),
            generator: annotation.generator().cloned(),
            body: annotation.body().to_vec(),
            target: TargetRecord::from(annotation.target()),
            tags: annotation.tags().iter().map(TagRecord::from).collect(),
            classification: annotation.classification().map(str::to_owned),
        }
    }
}

impl From<&Target> for TargetRecord {
    fn from(target: &Target) -> Self {
        Self {
            source: target.source().to_owned(),
            selector: target.selector().map(|selector| SelectorRecord {
                selector_type: "FragmentSelector",
                conforms_to: MEDIA_FRAGMENTS_SPEC,
                value: selector.value(),
            }),
        }
    }
}

impl From<&Tag> for TagRecord {
    fn from(tag: &Tag) -> Self {
        Self {
            tag: tag.tag.clone(),
            fragment_uri: tag.fragment.map(|fragment| fragment.to_string()),
        }
    }
}
