//! Port contracts for annotation tasks.
//!
//! Ports define infrastructure-agnostic interfaces used by the task domain.

pub mod image_info;

pub use image_info::{ImageInfoSource, ImageInfoSourceError, ImageInfoSourceResult};
