//! Error types for annotation construction and mutation.

use super::Motivation;
use thiserror::Error;

/// Errors returned while building or mutating annotations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnnotationError {
    /// The media fragment could not be parsed as an `xywh` region.
    #[error("invalid media fragment '{0}', expected xywh=x,y,w,h")]
    InvalidFragment(String),

    /// A region has a zero width or height.
    #[error("region must have a non-zero width and height")]
    EmptyRegion,

    /// A region extends beyond the bounds of the target image.
    #[error("region {region} exceeds image bounds {width}x{height}")]
    RegionOutOfBounds {
        /// The offending region in `x,y,w,h` form.
        region: String,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// The IIIF image information document is missing a required field.
    #[error("invalid image info: {0}")]
    InvalidImageInfo(String),

    /// The operation is not legal for the annotation's motivation.
    #[error("{operation} is not permitted on a {motivation} annotation")]
    NotPermitted {
        /// Motivation of the annotation that rejected the operation.
        motivation: Motivation,
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl AnnotationError {
    pub(crate) const fn not_permitted(motivation: Motivation, operation: &'static str) -> Self {
        Self::NotPermitted {
            motivation,
            operation,
        }
    }
}
