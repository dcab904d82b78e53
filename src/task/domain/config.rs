//! Construction parameters for tasks.

use crate::annotation::domain::{Annotation, Region};
use serde::Deserialize;
use serde_json::Value;

/// Raw, unvalidated parameters for [`super::Task::new`].
///
/// Deserialises from the camel-cased task payload served to the viewer:
///
/// ```json
/// {
///   "mode": "select",
///   "id": "t1",
///   "imgInfoUri": "https://iiif.example.org/image/abc/info.json",
///   "manifestUri": "https://iiif.example.org/manifest.json",
///   "objective": "Mark each building",
///   "tag": "building"
/// }
/// ```
///
/// Annotations cannot be deserialised and are supplied through
/// [`TaskConfig::with_annotations`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskConfig {
    /// Task mode, `select` or `transcribe`.
    pub mode: Option<String>,
    /// Task identifier.
    pub id: String,
    /// URI of the IIIF image information document.
    pub img_info_uri: Option<String>,
    /// URI of the IIIF manifest the image belongs to.
    pub manifest_uri: String,
    /// What the contributor is asked to do.
    pub objective: String,
    /// Additional guidance for the contributor.
    pub guidance: String,
    /// Tag applied to selections; required in select mode.
    pub tag: Option<String>,
    /// Classification applied to selections.
    pub classification: Option<String>,
    /// Raw transcription form descriptor; validated in transcribe mode.
    pub form: Option<Value>,
    /// Predefined selectable regions.
    pub regions: Vec<Region>,
    /// Whether the contributor liked the task.
    pub liked: bool,
    /// Annotations already made on the task.
    #[serde(skip)]
    pub annotations: Vec<Annotation>,
    /// Whether the task has been completed.
    pub complete: bool,
}

impl TaskConfig {
    /// Creates parameters with a mode and image information URI.
    #[must_use]
    pub fn new(mode: impl Into<String>, img_info_uri: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()),
            img_info_uri: Some(img_info_uri.into()),
            ..Self::default()
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the manifest URI.
    #[must_use]
    pub fn with_manifest_uri(mut self, manifest_uri: impl Into<String>) -> Self {
        self.manifest_uri = manifest_uri.into();
        self
    }

    /// Sets the objective.
    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// Sets the guidance.
    #[must_use]
    pub fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.guidance = guidance.into();
        self
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the classification.
    #[must_use]
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Sets the raw form descriptor.
    #[must_use]
    pub fn with_form(mut self, form: Value) -> Self {
        self.form = Some(form);
        self
    }

    /// Sets the predefined regions.
    #[must_use]
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    /// Sets the liked flag.
    #[must_use]
    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    /// Sets the annotations already made on the task.
    #[must_use]
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }
}
