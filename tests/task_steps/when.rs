//! When steps for task construction BDD scenarios.

use super::world::TaskWorld;
use iiif_annotation::{
    annotation::domain::Region,
    task::domain::{OverlayId, Task},
};
use rstest_bdd_macros::when;

#[when("the task is constructed")]
fn construct_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let config = world
        .pending_config
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending configuration in scenario world"))?;
    world.last_result = Some(Task::new(config));
    Ok(())
}

#[when(r#"overlay "{id}" is stored at {x:u32},{y:u32} with size {width:u32}x{height:u32}"#)]
fn store_overlay(
    world: &mut TaskWorld,
    id: String,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<(), eyre::Report> {
    let overlay_id = OverlayId::new(id)?;
    world
        .task_mut()?
        .store_overlay(overlay_id, Region::new(x, y, width, height));
    Ok(())
}
