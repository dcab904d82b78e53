//! Task aggregate root.

use super::{
    AnnotationSet, Form, ImageInfoError, Overlay, OverlayId, OverlaySet, RegionList,
    TaskConfig, TaskError, TaskId, TaskMode, TaskValidationError,
};
use crate::annotation::domain::{Annotation, AnnotationId, ImageInfo, Region};
use crate::task::ports::ImageInfoSource;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Form state held by a task.
///
/// Only transcribe-mode tasks validate their descriptor; other modes keep
/// whatever was supplied without interpreting it.
#[derive(Debug, Clone, PartialEq)]
enum TaskForm {
    Validated(Form),
    Unvalidated(Option<Value>),
}

/// Task aggregate root.
///
/// Identity and configuration are fixed at construction. Annotations,
/// overlays and regions are held in ordered collections that enforce their
/// own uniqueness rules; the `liked` and `complete` flags are toggled by the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    mode: TaskMode,
    id: TaskId,
    img_info_uri: String,
    manifest_uri: String,
    objective: String,
    guidance: String,
    tag: Option<String>,
    classification: Option<String>,
    form: TaskForm,
    regions: RegionList,
    liked: bool,
    annotations: AnnotationSet,
    complete: bool,
    overlays: OverlaySet,
}

impl Task {
    /// Validates the configuration and creates a task.
    ///
    /// Rules are checked in order: mode present, mode supported, image
    /// information URI present, tag present in select mode, form valid in
    /// transcribe mode, initial annotation identifiers unique.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskValidationError`] of the first rule that fails.
    pub fn new(config: TaskConfig) -> Result<Self, TaskValidationError> {
        let TaskConfig {
            mode,
            id,
            img_info_uri,
            manifest_uri,
            objective,
            guidance,
            tag,
            classification,
            form,
            regions,
            liked,
            annotations,
            complete,
        } = config;

        let validated_mode =
            TaskMode::try_from(mode.as_deref().ok_or(TaskValidationError::MissingMode)?)?;
        let validated_uri = img_info_uri
            .filter(|uri| !uri.is_empty())
            .ok_or(TaskValidationError::MissingImageInfoUri)?;
        if validated_mode == TaskMode::Select && tag.as_deref().is_none_or(str::is_empty) {
            return Err(TaskValidationError::MissingSelectTag);
        }
        let task_form = match validated_mode {
            TaskMode::Transcribe => TaskForm::Validated(Form::from_descriptor(form.as_ref())?),
            TaskMode::Select => TaskForm::Unvalidated(form),
        };
        let mut annotation_set = AnnotationSet::new();
        for annotation in annotations {
            let annotation_id = annotation.id();
            annotation_set
                .add(annotation)
                .map_err(|_| TaskValidationError::DuplicateAnnotation(annotation_id))?;
        }

        Ok(Self {
            mode: validated_mode,
            id: TaskId::new(id),
            img_info_uri: validated_uri,
            manifest_uri,
            objective,
            guidance,
            tag,
            classification,
            form: task_form,
            regions: RegionList::new(regions),
            liked,
            annotations: annotation_set,
            complete,
            overlays: OverlaySet::new(),
        })
    }

    /// Returns the task mode.
    #[must_use]
    pub const fn mode(&self) -> TaskMode {
        self.mode
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the image information URI.
    #[must_use]
    pub fn img_info_uri(&self) -> &str {
        &self.img_info_uri
    }

    /// Returns the manifest URI.
    #[must_use]
    pub fn manifest_uri(&self) -> &str {
        &self.manifest_uri
    }

    /// Returns the objective.
    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    /// Returns the guidance.
    #[must_use]
    pub fn guidance(&self) -> &str {
        &self.guidance
    }

    /// Returns the tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the classification, if any.
    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    /// Returns the validated form of a transcribe-mode task.
    #[must_use]
    pub const fn form(&self) -> Option<&Form> {
        match &self.form {
            TaskForm::Validated(form) => Some(form),
            TaskForm::Unvalidated(_) => None,
        }
    }

    /// Returns the uninterpreted form descriptor of a task that is not in
    /// transcribe mode.
    #[must_use]
    pub const fn unvalidated_form(&self) -> Option<&Value> {
        match &self.form {
            TaskForm::Validated(_) => None,
            TaskForm::Unvalidated(raw) => raw.as_ref(),
        }
    }

    /// Returns the predefined regions.
    #[must_use]
    pub const fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Returns the predefined regions for modification.
    pub const fn regions_mut(&mut self) -> &mut RegionList {
        &mut self.regions
    }

    /// Adds a predefined region.
    pub fn add_region(&mut self, region: Region) {
        self.regions.add(region);
    }

    /// Returns whether the contributor liked the task.
    #[must_use]
    pub const fn liked(&self) -> bool {
        self.liked
    }

    /// Sets the liked flag.
    pub const fn set_liked(&mut self, liked: bool) {
        self.liked = liked;
    }

    /// Flips the liked flag and returns the new value.
    pub const fn toggle_liked(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Sets the completion flag.
    pub const fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    /// Returns the annotations in order.
    #[must_use]
    pub const fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    /// Adds an annotation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::DuplicateAnnotation`] when the task already
    /// holds an annotation with the same identifier.
    pub fn add_annotation(&mut self, annotation: Annotation) -> Result<(), TaskError> {
        let annotation_id = annotation.id();
        self.annotations.add(annotation)?;
        debug!(task_id = %self.id, %annotation_id, "annotation added");
        Ok(())
    }

    /// Returns the annotation with the given identifier.
    ///
    /// Absence is a normal outcome and yields `None`.
    #[must_use]
    pub fn get_annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    /// Returns the annotation with the given identifier for modification.
    pub fn get_annotation_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.get_mut(id)
    }

    /// Deletes the annotation with the given identifier and returns it.
    ///
    /// The remaining annotations keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::AnnotationNotFound`] when no annotation matches.
    pub fn delete_annotation(&mut self, id: AnnotationId) -> Result<Annotation, TaskError> {
        let removed = self.annotations.remove(id)?;
        debug!(task_id = %self.id, annotation_id = %id, "annotation deleted");
        Ok(removed)
    }

    /// Returns the overlays in order.
    #[must_use]
    pub const fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    /// Returns the overlay with the given identifier, if any.
    #[must_use]
    pub fn overlay(&self, id: &OverlayId) -> Option<&Overlay> {
        self.overlays.get(id)
    }

    /// Stores an overlay, replacing in place any overlay with the same
    /// identifier. Returns the replaced overlay, if any.
    pub fn store_overlay(&mut self, id: OverlayId, rect: Region) -> Option<Overlay> {
        let overlay_id = id.clone();
        let replaced = self.overlays.store(Overlay::new(id, rect));
        debug!(
            task_id = %self.id,
            %overlay_id,
            %rect,
            replaced = replaced.is_some(),
            "overlay stored"
        );
        replaced
    }

    /// Removes and returns the overlay with the given identifier.
    pub fn remove_overlay(&mut self, id: &OverlayId) -> Option<Overlay> {
        self.overlays.remove(id)
    }

    /// Retrieves the image information document in a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ImageInfoError::Retrieval`] wrapping the transport or
    /// decoding failure reported by `source`.
    pub async fn fetch_image_info<S>(&self, source: &S) -> Result<Value, ImageInfoError>
    where
        S: ImageInfoSource + ?Sized,
    {
        info!(task_id = %self.id, uri = %self.img_info_uri, "fetching image info");
        source.fetch(&self.img_info_uri).await.map_err(|err| {
            warn!(
                task_id = %self.id,
                uri = %self.img_info_uri,
                error = %err,
                "image info retrieval failed"
            );
            ImageInfoError::Retrieval {
                uri: self.img_info_uri.clone(),
                source: err,
            }
        })
    }

    /// Retrieves the image information document and extracts the fields
    /// annotation targets depend on.
    ///
    /// # Errors
    ///
    /// Returns [`ImageInfoError::Retrieval`] when retrieval fails and
    /// [`ImageInfoError::Invalid`] when the document lacks an identifier or
    /// dimensions.
    pub async fn load_image_info<S>(&self, source: &S) -> Result<ImageInfo, ImageInfoError>
    where
        S: ImageInfoSource + ?Sized,
    {
        let document = self.fetch_image_info(source).await?;
        ImageInfo::from_json(&document).map_err(|err| ImageInfoError::Invalid {
            uri: self.img_info_uri.clone(),
            source: err,
        })
    }
}
