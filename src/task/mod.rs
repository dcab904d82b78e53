//! Annotation task management.
//!
//! A task validates its configuration for the chosen mode, owns the
//! annotations and overlays produced while a contributor works on it, and
//! retrieves the IIIF image information through an injected source. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
