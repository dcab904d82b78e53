//! IIIF image information consumed by annotation targets.

use super::{AnnotationError, Region};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The subset of an IIIF image information document that annotation
/// targets depend on: the image service identifier and full-size
/// dimensions.
///
/// Both Image API 2 (`@id`) and Image API 3 (`id`) identifiers are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageInfo {
    id: String,
    width: u32,
    height: u32,
}

impl ImageInfo {
    /// Creates image information from already validated parts.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidImageInfo`] when the identifier is
    /// empty or either dimension is zero.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Result<Self, AnnotationError> {
        let raw_id = id.into();
        let normalized = raw_id.trim();
        if normalized.is_empty() {
            return Err(AnnotationError::InvalidImageInfo(
                "image identifier must not be empty".to_owned(),
            ));
        }
        if width == 0 || height == 0 {
            return Err(AnnotationError::InvalidImageInfo(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self {
            id: normalized.to_owned(),
            width,
            height,
        })
    }

    /// Extracts image information from an IIIF `info.json` document.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidImageInfo`] when the identifier or
    /// either dimension is missing or malformed.
    pub fn from_json(document: &Value) -> Result<Self, AnnotationError> {
        let id = document
            .get("@id")
            .or_else(|| document.get("id"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AnnotationError::InvalidImageInfo("missing image identifier".to_owned())
            })?;
        let width = dimension(document, "width")?;
        let height = dimension(document, "height")?;
        Self::new(id, width, height)
    }

    /// Returns the image service identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full-size image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the full-size image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the region covering the whole image.
    #[must_use]
    pub const fn full_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

fn dimension(document: &Value, field: &str) -> Result<u32, AnnotationError> {
    document
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| AnnotationError::InvalidImageInfo(format!("missing or invalid {field}")))
}
