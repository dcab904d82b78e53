//! In-memory adapters for tests and offline fixtures.

mod image_info;

pub use image_info::InMemoryImageInfoSource;
