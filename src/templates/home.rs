use crate::config::AppSettings;

use super::{html_escape, Layout, NavItem};

/// Landing page shown to signed-in users
pub fn render(app: &AppSettings, username: &str) -> String {
    let body = format!(
        r#"<div class="app-content">
        <main class="app-main">
            <h1 id="h1-Welcome">Welcome, {username}!</h1>
            <p>Browse the stream gages on the <a id="home-map-link" href="{map}">map</a>
               or try the <a id="home-echo-link" href="{echo}">echo name</a> form.</p>
        </main>
    </div>"#,
        username = html_escape(username),
        map = html_escape(&app.page("map/")),
        echo = html_escape(&app.page("echo-name/"))
    );

    Layout {
        app,
        title: "Home",
        active: NavItem::Home,
        user: Some(username),
    }
    .render(&body)
}
