//! Given steps for project board BDD scenarios.

use super::world::{BoardWorld, description_of};
use lanebook::board::domain::LaneKind;
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_project_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.store().is_empty() {
        return Err(eyre::eyre!("scenario board should start empty"));
    }
    Ok(())
}

#[given(r#"a project "{title}" with a {length:usize} character description and {people:u32} people"#)]
fn existing_project(world: &mut BoardWorld, title: String, length: usize, people: u32) {
    let id = world
        .board
        .store()
        .create_project(title, description_of(length), people);
    world.last_project = Some(id);
}

#[given(r#"the card has been dragged onto the "{lane}" lane"#)]
fn card_has_been_dragged(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let kind = LaneKind::try_from(lane.as_str())?;
    world.drag_last_project_onto(kind)
}
