use std::borrow::Cow;

use axum::http::{HeaderMap, HeaderValue};

pub const FORWARDED_FOR: &str = "x-forwarded-for";
pub const REAL_IP: &str = "x-real-ip";
pub const UNKNOWN_CLIENT: &str = "unknown";

// Non-UTF-8 bytes become U+FFFD instead of dropping the header
fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

// Best-effort client identity: first forwarded address, then x-real-ip
pub fn client_identity(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get(FORWARDED_FOR).map(header_text) {
        let first = forwarded.split(',').next().unwrap_or_default().trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    headers
        .get(REAL_IP)
        .map(|v| header_text(v).into_owned())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
