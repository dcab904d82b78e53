//! Overlay value object.

use super::OverlayId;
use crate::annotation::domain::Region;
use serde::{Deserialize, Serialize};

/// Rectangular region drawn on the image, keyed by a stable identifier.
///
/// Overlays are immutable; changing the rectangle means storing a new
/// overlay under the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overlay {
    id: OverlayId,
    rect: Region,
}

impl Overlay {
    /// Creates an overlay.
    #[must_use]
    pub const fn new(id: OverlayId, rect: Region) -> Self {
        Self { id, rect }
    }

    /// Returns the overlay identifier.
    #[must_use]
    pub const fn id(&self) -> &OverlayId {
        &self.id
    }

    /// Returns the overlay rectangle.
    #[must_use]
    pub const fn rect(&self) -> Region {
        self.rect
    }
}
