//! Security headers middleware
//!
//! Adds security headers to all responses. The content security policy allows
//! map tiles from HTTPS tile servers, the OpenLayers bundle from its CDN and
//! the inline map bootstrap script.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

const PAGE_HEADERS: [(&str, &str); 6] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "permissions-policy",
        "accelerometer=(), camera=(), gyroscope=(), magnetometer=(), microphone=(), payment=(), usb=()",
    ),
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; img-src 'self' data: https:; connect-src 'self'; frame-ancestors 'self'; base-uri 'self'; form-action 'self'",
    ),
    ("x-xss-protection", "1; mode=block"),
];

const NO_STORE_HEADERS: [(&str, &str); 3] = [
    ("cache-control", "no-store, no-cache, must-revalidate, private"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

fn insert_all(response: &mut Response, headers: &[(&'static str, &'static str)]) {
    let map = response.headers_mut();
    for &(name, value) in headers {
        map.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Middleware that adds security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    insert_all(&mut response, &PAGE_HEADERS);
    response
}

/// Middleware for API routes that disables response caching
pub async fn api_cache_control_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    insert_all(&mut response, &NO_STORE_HEADERS);
    response
}
