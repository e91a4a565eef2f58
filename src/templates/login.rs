use crate::config::AppSettings;

use super::{html_escape, Layout, NavItem};

/// Sign-in form
///
/// `next` is posted back unchanged; `error` is shown above the form after a
/// failed attempt.
pub fn render(app: &AppSettings, next: &str, username: &str, error: Option<&str>) -> String {
    let error_html = error
        .map(|message| {
            format!(
                r#"<div id="login-error" class="alert alert-danger">{}</div>"#,
                html_escape(message)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<div class="app-content">
        <main class="app-main">
            <h1 id="h1-Login">Log In</h1>
            {error}
            <form id="login-form" method="post" action="{action}">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" value="{username}" autocomplete="username" required>
                <label for="password">Password</label>
                <input type="password" id="password" name="password" autocomplete="current-password" required>
                <input type="hidden" name="next" value="{next}">
                <button type="submit" id="login-submit" class="btn btn-primary">Log In</button>
            </form>
        </main>
    </div>"#,
        error = error_html,
        action = html_escape(&app.login_url),
        username = html_escape(username),
        next = html_escape(next)
    );

    Layout {
        app,
        title: "Log In",
        active: NavItem::None,
        user: None,
    }
    .render(&body)
}
