//! Shared world state for task construction BDD scenarios.

use iiif_annotation::task::domain::{Task, TaskConfig, TaskValidationError};
use rstest::fixture;

/// Image information URI used by every scenario.
pub const IMG_INFO_URI: &str = "https://iiif.example.org/image/abc/info.json";

/// Scenario world for task construction behaviour tests.
#[derive(Default)]
pub struct TaskWorld {
    pub pending_config: Option<TaskConfig>,
    pub last_result: Option<Result<Task, TaskValidationError>>,
}

impl TaskWorld {
    /// Returns the constructed task, failing when construction did not
    /// succeed.
    pub fn task_mut(&mut self) -> Result<&mut Task, eyre::Report> {
        match self.last_result.as_mut() {
            Some(Ok(task)) => Ok(task),
            Some(Err(err)) => Err(eyre::eyre!("task construction failed: {err}")),
            None => Err(eyre::eyre!("task has not been constructed")),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}
