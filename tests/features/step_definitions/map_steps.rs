//! Map page steps

use cucumber::{then, when};

use crate::features::support::TestWorld;

#[when("I visit the map page")]
async fn visit_map(world: &mut TestWorld) {
    world.visit("map/", false).await;
}

#[when(expr = "I visit the map page for gage {int}")]
async fn visit_gage(world: &mut TestWorld, gage_id: i64) {
    world.visit(&format!("map/{}/", gage_id), false).await;
}

#[then(expr = "the selected gage should be {int}")]
async fn selected_gage(world: &mut TestWorld, gage_id: i64) {
    assert_eq!(world.response().context_value("gage_id"), gage_id);
}

#[then("the map widget should have content")]
async fn map_widget_has_content(world: &mut TestWorld) {
    let map = world.response().html().expect_element("gizmo-map");
    assert!(map.child_count() >= 1);
}
