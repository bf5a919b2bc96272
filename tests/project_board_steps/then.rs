//! Then steps for project board BDD scenarios.

use super::world::BoardWorld;
use lanebook::board::{
    domain::LaneKind,
    validation::{FormError, FormField},
};
use rstest_bdd_macros::then;

#[then(r#"the number of cards in the "{lane}" lane is {count:usize}"#)]
fn lane_card_count(world: &BoardWorld, lane: String, count: usize) -> Result<(), eyre::Report> {
    let kind = LaneKind::try_from(lane.as_str())?;
    let view = world
        .board
        .lane(kind)
        .ok_or_else(|| eyre::eyre!("board has no {kind} lane"))?;

    if view.card_count() != count {
        return Err(eyre::eyre!(
            "expected {count} cards in the {kind} lane, found {}",
            view.card_count()
        ));
    }
    Ok(())
}

#[then("the store notification count is {count:usize}")]
fn notification_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.notifications.get();
    if actual != count {
        return Err(eyre::eyre!("expected {count} notifications, found {actual}"));
    }
    Ok(())
}

#[then("the last drop moved the project")]
fn last_drop_moved(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drop_moved {
        Some(true) => Ok(()),
        other => Err(eyre::eyre!("expected a moving drop, got {other:?}")),
    }
}

#[then("the last drop did not notify the store")]
fn last_drop_was_silent(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.last_drop_moved != Some(false) {
        return Err(eyre::eyre!(
            "expected an ignored drop, got {:?}",
            world.last_drop_moved
        ));
    }
    if world.notifications.get() != world.notifications_before_drop {
        return Err(eyre::eyre!(
            "drop notified the store: {} -> {}",
            world.notifications_before_drop,
            world.notifications.get()
        ));
    }
    Ok(())
}

#[then(r#"the submission fails for the "{first}" and "{second}" fields"#)]
fn submission_fails_for(
    world: &BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    let Err(FormError::Validation { fields }) = result else {
        return Err(eyre::eyre!("expected a validation failure, got {result:?}"));
    };

    let names: Vec<&str> = fields.iter().map(|field| FormField::as_str(*field)).collect();
    if names != [first.as_str(), second.as_str()] {
        return Err(eyre::eyre!("expected failing fields {first} and {second}, got {names:?}"));
    }
    Ok(())
}
