use crate::{config::AppSettings, gizmos::TextInputOptions};

use super::{html_escape, Layout, NavItem};

/// Echo-name form, with the greeting once a name was submitted
pub fn render(
    app: &AppSettings,
    user: Option<&str>,
    text_input: &TextInputOptions,
    name: &str,
) -> String {
    let greeting = if name.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h1 id="h1-Greeting">Hello, {}!</h1>"#,
            html_escape(name)
        )
    };

    let body = format!(
        r#"<div class="app-content">
        <main class="app-main">
            {greeting}
            <form id="echo-name-form" method="post" action="{action}">
                {input}
                <button type="submit" id="submit-name" class="btn btn-primary">Submit</button>
            </form>
        </main>
    </div>"#,
        greeting = greeting,
        action = html_escape(&app.page("echo-name/")),
        input = text_input.render()
    );

    Layout {
        app,
        title: "Echo Name",
        active: NavItem::EchoName,
        user,
    }
    .render(&body)
}
