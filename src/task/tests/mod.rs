//! Unit tests for the task module.

mod annotation_tests;

use crate::task::domain::TaskConfig;
use serde_json::{Value, json};

pub(super) const IMG_INFO_URI: &str = "https://iiif.example.org/image/abc/info.json";

/// Valid select-mode configuration.
pub(super) fn select_config() -> TaskConfig {
    TaskConfig::new("select", IMG_INFO_URI)
        .with_id("t1")
        .with_tag("building")
}

/// Minimal valid transcription form descriptor.
pub(super) fn form_descriptor() -> Value {
    json!({
        "model": { "title": "", "date": "" },
        "schema": {
            "fields": [
                { "type": "input", "inputType": "text", "label": "Title", "model": "title" },
                { "type": "input", "inputType": "text", "label": "Date", "model": "date" }
            ]
        }
    })
}
