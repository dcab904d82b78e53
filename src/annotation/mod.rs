//! Web Annotation model for IIIF image regions.
//!
//! Annotations follow a constrained subset of the W3C Web Annotation Data
//! Model. Each annotation targets an image described by an IIIF image
//! information document, optionally narrowed to a rectangular region
//! through a media-fragment selector. Two motivations are supported:
//!
//! - `commenting`: a single plain-text comment body
//! - `describing`: a description body with optional tags and a
//!   classification
//!
//! Domain types live in [`domain`].

pub mod domain;

#[cfg(test)]
mod tests;
