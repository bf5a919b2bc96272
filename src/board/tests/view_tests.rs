//! Unit tests for lanes, cards, rendering and board assembly.

use crate::board::{
    BoardConfig,
    domain::{LaneKind, ProjectStatus},
    services::ProjectStore,
    validation::FormInputs,
    views::{Board, Component, LaneLayout, LaneView, MarkupRenderer, mount},
};
use rstest::{fixture, rstest};
use std::rc::Rc;
use std::sync::Arc;

struct LaneParts {
    store: Rc<ProjectStore>,
    layout: Rc<LaneLayout>,
    renderer: Rc<MarkupRenderer>,
}

impl LaneParts {
    fn lane(&self, kind: LaneKind) -> LaneView {
        LaneView::new(
            kind,
            Rc::clone(&self.store),
            Rc::clone(&self.layout),
            Rc::clone(&self.renderer),
        )
    }
}

#[fixture]
fn parts() -> LaneParts {
    LaneParts {
        store: Rc::new(ProjectStore::default()),
        layout: Rc::new(LaneLayout::new(200)),
        renderer: Rc::new(
            MarkupRenderer::new().unwrap_or_else(|error| panic!("templates should compile: {error}")),
        ),
    }
}

#[rstest]
fn mounted_lane_filters_store_by_status(parts: LaneParts) -> eyre::Result<()> {
    let mut active = parts.lane(LaneKind::Active);
    let mut finished = parts.lane(LaneKind::Finished);
    mount(&mut active)?;
    mount(&mut finished)?;

    let done = parts.store.create_project("Ship it", "the project that will be finished", 2);
    parts.store.create_project("Keep going", "the project that stays active today", 4);
    parts.store.move_project_status(done, ProjectStatus::Finished);

    eyre::ensure!(active.card_count() == 1);
    eyre::ensure!(finished.card_count() == 1);
    eyre::ensure!(finished.projects().iter().all(|project| project.id() == done));
    Ok(())
}

#[rstest]
fn lane_rebuilds_snapshot_on_every_notification(parts: LaneParts) -> eyre::Result<()> {
    let mut active = parts.lane(LaneKind::Active);
    mount(&mut active)?;
    let primed = active.refresh_count();

    let id = parts.store.create_project("Counted", "every mutation rebuilds the lane", 2);
    parts.store.move_project_status(id, ProjectStatus::Finished);
    parts.store.move_project_status(id, ProjectStatus::Finished);

    eyre::ensure!(active.refresh_count() == primed + 2);
    eyre::ensure!(active.card_count() == 0);
    Ok(())
}

#[rstest]
fn lane_primes_from_existing_projects_when_configured(parts: LaneParts) -> eyre::Result<()> {
    parts.store.create_project("Early bird", "created before the lane was mounted", 3);
    let mut active = parts.lane(LaneKind::Active);

    eyre::ensure!(active.card_count() == 0);
    mount(&mut active)?;
    eyre::ensure!(active.card_count() == 1);
    eyre::ensure!(active.is_subscribed());
    Ok(())
}

#[rstest]
fn configure_subscribes_only_once(parts: LaneParts) {
    let mut active = parts.lane(LaneKind::Active);
    active.configure();
    active.configure();

    assert_eq!(parts.store.listener_count(), 1);
}

#[rstest]
fn unsubscribed_lane_keeps_last_snapshot(parts: LaneParts) -> eyre::Result<()> {
    let mut active = parts.lane(LaneKind::Active);
    mount(&mut active)?;
    parts.store.create_project("Before", "seen while the lane was listening", 2);

    active.unsubscribe();
    parts.store.create_project("After", "created after the lane stopped listening", 2);

    eyre::ensure!(!active.is_subscribed());
    eyre::ensure!(active.card_count() == 1);
    eyre::ensure!(parts.store.listener_count() == 0);
    Ok(())
}

#[rstest]
fn lane_markup_contains_heading_list_and_cards(parts: LaneParts) -> eyre::Result<()> {
    let mut active = parts.lane(LaneKind::Active);
    mount(&mut active)?;
    let id = parts
        .store
        .create_project("Build API", "Design and ship the public REST API", 3);

    let markup = active.render_content()?;

    eyre::ensure!(markup.contains(r#"id="active-projects""#));
    eyre::ensure!(markup.contains("<h2>ACTIVE PROJECTS</h2>"));
    eyre::ensure!(markup.contains(r#"<ul id="active-projects-list" style="min-height: 0">"#));
    eyre::ensure!(markup.contains(&format!(r#"<li id="{id}" draggable="true">"#)));
    eyre::ensure!(markup.contains("<h5>Build API</h5>"));
    eyre::ensure!(markup.contains("<h6>3</h6>"));
    Ok(())
}

#[rstest]
fn card_markup_escapes_project_text(parts: LaneParts) -> eyre::Result<()> {
    let mut active = parts.lane(LaneKind::Active);
    mount(&mut active)?;
    let id = parts
        .store
        .create_project("<b>Bold</b>", "descriptions & titles are escaped here", 2);
    let card = active
        .card(id)
        .ok_or_else(|| eyre::eyre!("card should be rendered"))?;

    let markup = card.render_content()?;

    eyre::ensure!(markup.contains("&lt;b&gt;Bold"));
    eyre::ensure!(!markup.contains("<b>"));
    eyre::ensure!(markup.contains("descriptions &amp; titles"));
    Ok(())
}

#[rstest]
fn board_builds_configured_lanes_once() -> eyre::Result<()> {
    let config = BoardConfig {
        lanes: vec![LaneKind::Finished, LaneKind::Active, LaneKind::Finished],
        ..BoardConfig::default()
    }
    .with_lane_min_height(320);
    let board = Board::new(&config, Arc::new(mockable::DefaultClock))?;

    let kinds: Vec<LaneKind> = board.lanes().iter().map(LaneView::kind).collect();
    eyre::ensure!(kinds == vec![LaneKind::Finished, LaneKind::Active]);
    eyre::ensure!(board.store().listener_count() == 2);

    board.layout().expand_all();
    eyre::ensure!(board.render()?.contains("min-height: 320px"));
    Ok(())
}

#[rstest]
fn board_form_feeds_lanes() -> eyre::Result<()> {
    let mut board = Board::with_defaults()?;
    board.form_mut().fill(FormInputs::new(
        "Build API",
        "Design and ship the public REST API",
        "3",
    ));

    let id = board.form_mut().submit()?;

    let active = board
        .lane(LaneKind::Active)
        .ok_or_else(|| eyre::eyre!("missing active lane"))?;
    eyre::ensure!(active.card(id).is_some());
    eyre::ensure!(board.form().inputs().title.is_empty());
    Ok(())
}

#[rstest]
fn board_snapshot_lists_projects_per_lane() -> eyre::Result<()> {
    let board = Board::with_defaults()?;
    let id = board
        .store()
        .create_project("Snapshot", "serialised board state for debugging", 2);
    board.store().move_project_status(id, ProjectStatus::Finished);

    let snapshot: serde_json::Value = serde_json::from_str(&board.snapshot_json()?)?;

    eyre::ensure!(snapshot["projects"][0]["status"] == "finished");
    eyre::ensure!(snapshot["lanes"][0]["lane"] == "active");
    eyre::ensure!(snapshot["lanes"][1]["projects"][0] == id.to_string());
    Ok(())
}
