use crate::{config::AppSettings, gizmos::MapViewOptions, models::GageLink};

use super::{html_escape, Layout, NavItem};

fn gage_navigation(links: &[GageLink]) -> String {
    links
        .iter()
        .map(|link| {
            let class = if link.active { "nav-item active" } else { "nav-item" };
            format!(
                r#"
                <li id="{id}" class="{class}"><a href="{href}">{label}</a></li>"#,
                id = html_escape(&link.html_id),
                class = class,
                href = html_escape(&link.href),
                label = html_escape(&link.label)
            )
        })
        .collect()
}

/// Map page: gage navigation on the left, map widget on the right
pub fn render(
    app: &AppSettings,
    user: Option<&str>,
    links: &[GageLink],
    map_options: &MapViewOptions,
) -> String {
    let title = links
        .iter()
        .find(|link| link.active)
        .map(|link| link.label.as_str())
        .unwrap_or("Map");

    let body = format!(
        r#"<div class="app-content">
        <ul id="gage-navigation" class="app-navigation">{nav}
        </ul>
        <main class="app-main">
            {map}
        </main>
    </div>"#,
        nav = gage_navigation(links),
        map = map_options.render()
    );

    Layout {
        app,
        title,
        active: NavItem::Map,
        user,
    }
    .render(&body)
}
