//! Rectangular image regions and their media-fragment encoding.
//!
//! Regions are expressed in the pixel coordinate space of the full-size
//! image. The only textual encoding is the W3C media-fragment `xywh`
//! syntax, which is shared by target selectors and tag fragments.

use super::AnnotationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the spatial media-fragment dimension.
const XYWH_KEY: &str = "xywh=";

/// Explicit pixel unit accepted in front of the coordinates.
const PIXEL_UNIT: &str = "pixel:";

/// Axis-aligned rectangle in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Region {
    /// Creates a region from its origin and size.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when the region has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` when the region lies entirely within an image of the
    /// given dimensions.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = u64::from(self.x) + u64::from(self.width);
        let bottom = u64::from(self.y) + u64::from(self.height);
        right <= u64::from(width) && bottom <= u64::from(height)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Spatial media fragment (`xywh=x,y,w,h`) narrowing a target to a region.
///
/// # Examples
///
///     use iiif_annotation::annotation::domain::Fragment;
///
///     let fragment = Fragment::parse("xywh=10,10,50,50").expect("valid");
///     assert_eq!(fragment.region().width, 50);
///     assert_eq!(fragment.to_string(), "xywh=10,10,50,50");
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fragment(Region);

impl Fragment {
    /// Creates a fragment for a non-empty region.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::EmptyRegion`] when the region has no area.
    pub const fn new(region: Region) -> Result<Self, AnnotationError> {
        if region.is_empty() {
            return Err(AnnotationError::EmptyRegion);
        }
        Ok(Self(region))
    }

    /// Parses a media fragment.
    ///
    /// A leading `#` or `?` is tolerated, as is the explicit `pixel:` unit.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidFragment`] when the value is not a
    /// four-component `xywh` fragment, or [`AnnotationError::EmptyRegion`]
    /// when the parsed region has no area.
    pub fn parse(value: &str) -> Result<Self, AnnotationError> {
        let invalid = || AnnotationError::InvalidFragment(value.to_owned());
        let trimmed = value.trim().trim_start_matches(['#', '?']);
        let dimension = trimmed.strip_prefix(XYWH_KEY).ok_or_else(invalid)?;
        let coordinates = dimension.strip_prefix(PIXEL_UNIT).unwrap_or(dimension);

        let parsed = coordinates
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        let [x, y, width, height] = parsed.as_slice() else {
            return Err(invalid());
        };

        Self::new(Region::new(*x, *y, *width, *height))
    }

    /// Returns the region addressed by the fragment.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.0
    }
}

impl From<Fragment> for Region {
    fn from(fragment: Fragment) -> Self {
        fragment.0
    }
}

impl TryFrom<String> for Fragment {
    type Error = AnnotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Fragment {
    type Error = AnnotationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.to_string()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{XYWH_KEY}{}", self.0)
    }
}
