//! Health check and request-dump handlers

use axum::{
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri, Version},
};
use std::fmt::Write as _;
use tracing::info;

/// Log target for request dumps, kept enabled regardless of `RUST_LOG`.
pub const DUMP_TARGET: &str = "relay_dump";

/// Root health check endpoint
pub async fn root() -> &'static str {
    "netlify_teams_relay - healthy"
}

/// Logs the whole request for operator inspection.
pub async fn dump(
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let request_dump = render_request_dump(&method, &uri, version, &headers, &body);
    info!(target: DUMP_TARGET, "Request dump:\n-----------\n{}\n-----------", request_dump);
    StatusCode::OK
}

/// Wire-style rendering: request line, one header per line, blank line, body.
pub fn render_request_dump(
    method: &Method,
    uri: &Uri,
    version: Version,
    headers: &HeaderMap,
    body: &[u8],
) -> String {
    let mut out = String::new();
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    write!(&mut out, "{} {} {:?}\r\n", method, target, version).ok();
    for (name, value) in headers {
        write!(
            &mut out,
            "{}: {}\r\n",
            name,
            String::from_utf8_lossy(value.as_bytes())
        )
        .ok();
    }
    out.push_str("\r\n");
    out.push_str(&String::from_utf8_lossy(body));
    out
}
