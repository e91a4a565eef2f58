//! HTML page rendering
//!
//! Pages are rendered with `format!` into a shared layout. Every rendered page
//! carries the context it was built from as a [`RenderContext`] response
//! extension so in-process clients can inspect what the controller computed.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::config::AppSettings;

pub mod echo_name;
pub mod error;
pub mod home;
pub mod login;
pub mod map;

/// Escape text for inclusion in HTML content and quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Template context of a rendered page, attached to the response extensions
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext(pub Value);

/// A rendered HTML page together with its template context
#[derive(Debug, Clone)]
pub struct Page {
    pub context: Value,
    pub html: String,
}

impl Page {
    pub fn new(context: Value, html: String) -> Self {
        Self { context, html }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.html,
        )
            .into_response();
        response
            .extensions_mut()
            .insert(RenderContext(self.context));
        response
    }
}

/// Top level navigation entries of the application header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Map,
    EchoName,
    None,
}

/// Shared page layout
pub struct Layout<'a> {
    pub app: &'a AppSettings,
    /// Shown in the `<title>` after the application title
    pub title: &'a str,
    pub active: NavItem,
    /// Username of the signed-in user, if any
    pub user: Option<&'a str>,
}

impl Layout<'_> {
    fn nav_entry(&self, item: NavItem, id: &str, label: &str, href: &str) -> String {
        let class = if self.active == item {
            "header-link active"
        } else {
            "header-link"
        };
        format!(
            r#"<li id="{id}" class="{class}"><a href="{href}">{label}</a></li>"#,
            id = id,
            class = class,
            href = html_escape(href),
            label = label
        )
    }

    /// Wrap `body` in the application chrome
    pub fn render(&self, body: &str) -> String {
        let session_link = match self.user {
            Some(username) => format!(
                r#"<li id="header-user" class="header-user">Signed in as {user} <a href="{href}">Log Out</a></li>"#,
                user = html_escape(username),
                href = html_escape(&self.app.logout_url)
            ),
            None => format!(
                r#"<li id="header-login" class="header-user"><a href="{href}">Log In</a></li>"#,
                href = html_escape(&self.app.login_url)
            ),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{app_title} | {title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
               margin: 0; background: #f5f5f5; color: #333; }}
        .app-header {{ background: #1b6aa5; color: white; padding: 0 24px; display: flex;
                      align-items: center; justify-content: space-between; }}
        .app-header a {{ color: white; text-decoration: none; }}
        .app-header ul {{ list-style: none; display: flex; gap: 16px; margin: 0; padding: 0; }}
        .header-link.active a {{ font-weight: bold; text-decoration: underline; }}
        .app-content {{ display: flex; min-height: calc(100vh - 64px); }}
        .app-navigation {{ list-style: none; margin: 0; padding: 16px; width: 200px; background: white; }}
        .app-navigation li.active a {{ font-weight: bold; color: #1b6aa5; }}
        .app-main {{ flex: 1; padding: 16px; }}
    </style>
</head>
<body>
    <header class="app-header">
        <h2 class="app-title"><a href="{root}">{app_title}</a></h2>
        <ul class="header-nav">
            {home}
            {map}
            {echo}
            {session}
        </ul>
    </header>
    {body}
</body>
</html>"#,
            app_title = html_escape(&self.app.title),
            title = html_escape(self.title),
            root = html_escape(&self.app.page("")),
            home = self.nav_entry(NavItem::Home, "header-home", "Home", &self.app.page("")),
            map = self.nav_entry(NavItem::Map, "header-map", "Map", &self.app.page("map/")),
            echo = self.nav_entry(
                NavItem::EchoName,
                "header-echo-name",
                "Echo Name",
                &self.app.page("echo-name/")
            ),
            session = session_link,
            body = body
        )
    }
}
