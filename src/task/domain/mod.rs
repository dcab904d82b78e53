//! Domain model for annotation tasks.
//!
//! A task is created once per task instance with full validation. It owns
//! the annotations a contributor produces, the overlays drawn on the image
//! at runtime and the predefined regions offered for selection, while all
//! network access stays behind the image-info port.

mod collections;
mod config;
mod error;
mod form;
mod ids;
mod mode;
mod overlay;
mod task;

pub use collections::{AnnotationSet, OverlaySet, RegionList};
pub use config::TaskConfig;
pub use error::{FormError, ImageInfoError, TaskError, TaskValidationError};
pub use form::{Form, FormField};
pub use ids::{OverlayId, TaskId};
pub use mode::TaskMode;
pub use overlay::Overlay;
pub use task::Task;
