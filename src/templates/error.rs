//! Standalone HTML error page

use axum::http::StatusCode;

use super::html_escape;

/// Render the error page for `status` with a human readable message
pub fn render(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{code} {reason}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
               display: flex; justify-content: center; align-items: center;
               height: 100vh; margin: 0; background: #f5f5f5; }}
        .error-box {{ background: white; padding: 40px; border-radius: 8px;
                     box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; max-width: 500px; }}
        h1 {{ color: #dc3545; margin-bottom: 16px; font-size: 24px; }}
        p {{ color: #666; margin-bottom: 24px; }}
        a {{ color: #0066cc; text-decoration: none; }}
    </style>
</head>
<body>
    <div class="error-box">
        <h1 id="h1-Error">{code} {reason}</h1>
        <p id="error-message">{message}</p>
        <a href="javascript:history.back()">Go Back</a>
    </div>
</body>
</html>"#,
        code = status.as_u16(),
        reason = html_escape(reason),
        message = html_escape(message)
    )
}
