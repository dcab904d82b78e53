//! Ordered collections owned by a task.
//!
//! Each collection keeps insertion order and enforces its own uniqueness
//! rule, so the membership check and the mutation always happen in the
//! same call.

use super::{Overlay, OverlayId, TaskError};
use crate::annotation::domain::{Annotation, AnnotationId, Region};

/// Ordered annotations, unique by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
}

impl AnnotationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an annotation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::DuplicateAnnotation`] when an annotation with the
    /// same identifier is already present.
    pub fn add(&mut self, annotation: Annotation) -> Result<(), TaskError> {
        if self.contains(annotation.id()) {
            return Err(TaskError::DuplicateAnnotation(annotation.id()));
        }
        self.items.push(annotation);
        Ok(())
    }

    /// Returns the annotation with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.iter().find(|annotation| annotation.id() == id)
    }

    /// Returns a mutable reference to the annotation with the given
    /// identifier, if present.
    pub fn get_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.items.iter_mut().find(|annotation| annotation.id() == id)
    }

    /// Returns `true` when an annotation with the identifier is present.
    #[must_use]
    pub fn contains(&self, id: AnnotationId) -> bool {
        self.get(id).is_some()
    }

    /// Removes and returns the annotation with the given identifier,
    /// preserving the order of the remaining annotations.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::AnnotationNotFound`] when no annotation matches.
    pub fn remove(&mut self, id: AnnotationId) -> Result<Annotation, TaskError> {
        let position = self
            .items
            .iter()
            .position(|annotation| annotation.id() == id)
            .ok_or(TaskError::AnnotationNotFound(id))?;
        Ok(self.items.remove(position))
    }

    /// Returns the annotations in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Annotation] {
        &self.items
    }

    /// Iterates over the annotations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    /// Returns the number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the set holds no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered overlays, at most one per identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlaySet {
    items: Vec<Overlay>,
}

impl OverlaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts or replaces an overlay keyed by its identifier.
    ///
    /// A replacement keeps the position of the overlay it replaces; a new
    /// overlay is appended. Returns the replaced overlay, if any.
    pub fn store(&mut self, overlay: Overlay) -> Option<Overlay> {
        let position = self
            .items
            .iter()
            .position(|existing| existing.id() == overlay.id());
        if let Some(slot) = position.and_then(|index| self.items.get_mut(index)) {
            return Some(std::mem::replace(slot, overlay));
        }
        self.items.push(overlay);
        None
    }

    /// Returns the overlay with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: &OverlayId) -> Option<&Overlay> {
        self.items.iter().find(|overlay| overlay.id() == id)
    }

    /// Removes and returns the overlay with the given identifier.
    pub fn remove(&mut self, id: &OverlayId) -> Option<Overlay> {
        let position = self.items.iter().position(|overlay| overlay.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Returns the overlays in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Overlay] {
        &self.items
    }

    /// Iterates over the overlays in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Overlay> {
        self.items.iter()
    }

    /// Returns the number of overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the set holds no overlays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a OverlaySet {
    type Item = &'a Overlay;
    type IntoIter = std::slice::Iter<'a, Overlay>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered list of predefined selectable regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionList {
    items: Vec<Region>,
}

impl RegionList {
    /// Creates a list from regions in order.
    #[must_use]
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            items: regions.into_iter().collect(),
        }
    }

    /// Appends a region.
    pub fn add(&mut self, region: Region) {
        self.items.push(region);
    }

    /// Removes the first occurrence of a region, returning whether one was
    /// removed.
    pub fn remove(&mut self, region: Region) -> bool {
        let Some(position) = self.items.iter().position(|item| *item == region) else {
            return false;
        };
        self.items.remove(position);
        true
    }

    /// Returns the regions in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Region] {
        &self.items
    }

    /// Iterates over the regions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.items.iter()
    }

    /// Returns the number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
