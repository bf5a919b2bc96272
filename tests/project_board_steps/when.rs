//! When steps for project board BDD scenarios.

use super::world::{BoardWorld, description_of};
use lanebook::board::{domain::LaneKind, validation::FormInputs};
use rstest_bdd_macros::when;

#[when(
    r#"the form is submitted with title "{title}", a {length:usize} character description and "{people}" people"#
)]
fn submit_form(world: &mut BoardWorld, title: String, length: usize, people: String) {
    let form = world.board.form_mut();
    form.fill(FormInputs::new(title, description_of(length), people));
    let result = form.submit();
    if let Ok(id) = result {
        world.last_project = Some(id);
    }
    world.last_submission = Some(result);
}

#[when(r#"the card is dragged onto the "{lane}" lane"#)]
fn drag_card(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let kind = LaneKind::try_from(lane.as_str())?;
    world.drag_last_project_onto(kind)
}
