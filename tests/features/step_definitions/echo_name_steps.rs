//! Echo-name form steps

use cucumber::{then, when};

use crate::features::support::TestWorld;

#[when(expr = "I submit the name {string}")]
async fn submit_name(world: &mut TestWorld, name: String) {
    let app = world.app();
    let response = app
        .post_form(&app.url("echo-name/"), &[("name-input", &name)])
        .await;
    world.last_response = Some(response);
}

#[then(expr = "the echoed name should be {string}")]
async fn echoed_name(world: &mut TestWorld, name: String) {
    assert_eq!(world.response().context_value("name"), name.as_str());
}
