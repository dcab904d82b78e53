//! Annotation targets scoped to an IIIF image.

use super::{AnnotationError, Fragment, ImageInfo, Region};

/// Specification that fragment selector values conform to.
pub const MEDIA_FRAGMENTS_SPEC: &str = "http://www.w3.org/TR/media-frags/";

/// Selector narrowing a target to a rectangular sub-region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentSelector {
    fragment: Fragment,
}

impl FragmentSelector {
    /// Creates a selector for the given fragment.
    #[must_use]
    pub const fn new(fragment: Fragment) -> Self {
        Self { fragment }
    }

    /// Returns the selected fragment.
    #[must_use]
    pub const fn fragment(&self) -> Fragment {
        self.fragment
    }

    /// Returns the selector value, e.g. `xywh=10,10,50,50`.
    #[must_use]
    pub fn value(&self) -> String {
        self.fragment.to_string()
    }
}

/// Image region an annotation refers to.
///
/// The target always references the full image service; a selector is
/// present only once the target has been narrowed to a sub-region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    source: String,
    width: u32,
    height: u32,
    selector: Option<FragmentSelector>,
}

impl Target {
    /// Builds an un-narrowed target from image information.
    #[must_use]
    pub fn from_image_info(image_info: &ImageInfo) -> Self {
        Self {
            source: image_info.id().to_owned(),
            width: image_info.width(),
            height: image_info.height(),
            selector: None,
        }
    }

    /// Returns the image service identifier the target points at.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the fragment selector, if the target has been narrowed.
    #[must_use]
    pub const fn selector(&self) -> Option<&FragmentSelector> {
        self.selector.as_ref()
    }

    /// Returns the region the target covers, defaulting to the whole image.
    #[must_use]
    pub fn region(&self) -> Region {
        self.selector.map_or_else(
            || Region::new(0, 0, self.width, self.height),
            |selector| selector.fragment().region(),
        )
    }

    /// Narrows the target to a region of the image.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::EmptyRegion`] for a zero-area region and
    /// [`AnnotationError::RegionOutOfBounds`] when the region extends past
    /// the image edges.
    pub fn select(&mut self, region: Region) -> Result<(), AnnotationError> {
        let fragment = Fragment::new(region)?;
        if !region.fits_within(self.width, self.height) {
            return Err(AnnotationError::RegionOutOfBounds {
                region: region.to_string(),
                width: self.width,
                height: self.height,
            });
        }
        self.selector = Some(FragmentSelector::new(fragment));
        Ok(())
    }

    /// Widens the target back to the whole image.
    pub fn clear_selection(&mut self) {
        self.selector = None;
    }
}
