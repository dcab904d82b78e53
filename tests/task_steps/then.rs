//! Then steps for task construction BDD scenarios.

use super::world::TaskWorld;
use iiif_annotation::{
    annotation::domain::Region,
    task::domain::{OverlayId, TaskMode},
};
use rstest_bdd_macros::then;

#[then(r#"construction fails with "{message}""#)]
fn construction_fails_with(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing construction result in scenario world"))?;
    let Err(err) = result else {
        return Err(eyre::eyre!("expected construction to fail"));
    };
    if !err.to_string().contains(&message) {
        return Err(eyre::eyre!("expected error containing '{message}', got '{err}'"));
    }
    Ok(())
}

#[then(r#"the task is created in "{mode}" mode"#)]
fn task_created_in_mode(world: &mut TaskWorld, mode: String) -> Result<(), eyre::Report> {
    let task = world.task_mut()?;
    let expected = TaskMode::try_from(mode.as_str())?;
    if task.mode() != expected {
        return Err(eyre::eyre!("expected {expected} mode, found {}", task.mode()));
    }
    if !task.overlays().is_empty() {
        return Err(eyre::eyre!("expected a new task to have no overlays"));
    }
    Ok(())
}

#[then("the task holds {count:usize} overlay")]
fn task_holds_overlays(world: &mut TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.task_mut()?.overlays().len();
    eyre::ensure!(found == count, "expected {count} overlays, found {found}");
    Ok(())
}

#[then(r#"overlay "{id}" covers {x:u32},{y:u32} with size {width:u32}x{height:u32}"#)]
fn overlay_covers(
    world: &mut TaskWorld,
    id: String,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<(), eyre::Report> {
    let overlay_id = OverlayId::new(id)?;
    let rect = world
        .task_mut()?
        .overlay(&overlay_id)
        .map(|overlay| overlay.rect())
        .ok_or_else(|| eyre::eyre!("overlay {overlay_id} not found"))?;
    eyre::ensure!(
        rect == Region::new(x, y, width, height),
        "unexpected overlay rectangle {rect}"
    );
    Ok(())
}
