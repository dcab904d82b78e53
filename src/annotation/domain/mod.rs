//! Domain model for Web Annotations.
//!
//! Annotation variants are expressed as a sum type over motivations so
//! that each variant only carries the fields that are legal for it. The
//! target is always built from the image information through one shared
//! routine, and every annotation renders to the same record shape.

mod agent;
mod annotation;
mod body;
mod error;
mod ids;
mod image_info;
mod record;
mod region;
mod target;

pub use agent::{Agent, AgentKind};
pub use annotation::{Annotation, AnnotationContent, Motivation, NewComment, NewDescription, Tag};
pub use body::{Body, BodyType, Purpose, TEXT_PLAIN};
pub use error::AnnotationError;
pub use ids::AnnotationId;
pub use image_info::ImageInfo;
pub use record::{AnnotationRecord, SelectorRecord, TagRecord, TargetRecord, WEB_ANNOTATION_CONTEXT};
pub use region::{Fragment, Region};
pub use target::{FragmentSelector, MEDIA_FRAGMENTS_SPEC, Target};
