//! Step definitions for task construction scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
