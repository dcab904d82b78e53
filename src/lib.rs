//! IIIF annotation tasks.
//!
//! This crate models user-generated annotations on IIIF-served images
//! inside an annotation task. A [`task::domain::Task`] validates its
//! construction parameters for the selected mode, owns the annotations
//! produced by a contributor and the region overlays drawn on the image,
//! and retrieves the IIIF image information through an injected port.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`annotation`]: Web Annotation model for comments and descriptions
//! - [`task`]: Task aggregate, overlays and image-info retrieval

pub mod annotation;
pub mod task;
