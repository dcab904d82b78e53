//! Given steps for task construction BDD scenarios.

use super::world::{IMG_INFO_URI, TaskWorld};
use iiif_annotation::task::domain::TaskConfig;
use rstest_bdd_macros::given;

#[given(r#"a task configuration in "{mode}" mode"#)]
fn task_configuration_in_mode(world: &mut TaskWorld, mode: String) {
    world.pending_config = Some(TaskConfig::new(mode, IMG_INFO_URI).with_id("scenario-task"));
}

#[given(r#"the configuration has tag "{tag}""#)]
fn configuration_has_tag(world: &mut TaskWorld, tag: String) -> Result<(), eyre::Report> {
    let config = world
        .pending_config
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending configuration in scenario world"))?;
    world.pending_config = Some(config.with_tag(tag));
    Ok(())
}
