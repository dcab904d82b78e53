//! Task modes.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction mode of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskMode {
    /// The contributor selects and tags regions of the image.
    Select,
    /// The contributor transcribes the image through a form.
    Transcribe,
}

impl TaskMode {
    /// Returns the canonical mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Transcribe => "transcribe",
        }
    }
}

impl TryFrom<&str> for TaskMode {
    type Error = TaskValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "select" => Ok(Self::Select),
            "transcribe" => Ok(Self::Transcribe),
            _ => Err(TaskValidationError::InvalidMode(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
