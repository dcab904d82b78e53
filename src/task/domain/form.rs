//! Transcription form descriptors.
//!
//! A form descriptor pairs a `model` object holding the default value of
//! each transcribed field with a `schema` listing the fields to render:
//!
//! ```json
//! {
//!   "model": { "title": "", "date": "" },
//!   "schema": {
//!     "fields": [
//!       { "type": "input", "inputType": "text", "label": "Title", "model": "title" },
//!       { "type": "input", "inputType": "text", "label": "Date", "model": "date" }
//!     ]
//!   }
//! }
//! ```
//!
//! Validation only checks the structure the task depends on; the remaining
//! field attributes are preserved for the rendering layer.

use super::FormError;
use serde_json::{Map, Value};

/// A single field of a transcription form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    model: String,
    attributes: Map<String, Value>,
}

impl FormField {
    /// Returns the model key the field reads and writes.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the field label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.attributes.get("label").and_then(Value::as_str)
    }

    /// Returns the rendering type of the field, if any.
    #[must_use]
    pub fn field_type(&self) -> Option<&str> {
        self.attributes.get("type").and_then(Value::as_str)
    }

    /// Returns all raw field attributes, including `model`.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

/// Validated transcription form.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    model: Map<String, Value>,
    fields: Vec<FormField>,
}

impl Form {
    /// Validates a raw form descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] describing the first structural problem found.
    pub fn from_descriptor(descriptor: Option<&Value>) -> Result<Self, FormError> {
        let object = descriptor
            .ok_or(FormError::Missing)?
            .as_object()
            .ok_or(FormError::NotAnObject)?;
        let model = object
            .get("model")
            .and_then(Value::as_object)
            .ok_or(FormError::MissingModel)?;
        let schema = object
            .get("schema")
            .and_then(Value::as_object)
            .ok_or(FormError::MissingSchema)?;
        let raw_fields = schema
            .get("fields")
            .and_then(Value::as_array)
            .ok_or(FormError::InvalidFields)?;
        if raw_fields.is_empty() {
            return Err(FormError::NoFields);
        }

        let fields = raw_fields
            .iter()
            .enumerate()
            .map(|(index, raw)| parse_field(index, raw, model))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            model: model.clone(),
            fields,
        })
    }

    /// Returns the model with the default value of every field.
    #[must_use]
    pub const fn model(&self) -> &Map<String, Value> {
        &self.model
    }

    /// Returns the fields in schema order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Looks up a field by model key.
    #[must_use]
    pub fn field(&self, model_key: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.model == model_key)
    }
}

fn parse_field(
    index: usize,
    raw: &Value,
    model: &Map<String, Value>,
) -> Result<FormField, FormError> {
    let attributes = raw
        .as_object()
        .ok_or(FormError::FieldWithoutModel(index))?;
    let key = attributes
        .get("model")
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
        .ok_or(FormError::FieldWithoutModel(index))?;
    if !model.contains_key(key) {
        return Err(FormError::UnknownModelKey(key.to_owned()));
    }
    Ok(FormField {
        model: key.to_owned(),
        attributes: attributes.clone(),
    })
}
