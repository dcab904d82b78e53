//! HTTP adapters backed by `reqwest`.

mod image_info;

pub use image_info::{HttpImageInfoConfig, HttpImageInfoSource};
