//! Outgoing request header augmentation.

use std::collections::BTreeMap;

/// Header name to header value
pub type Headers = BTreeMap<String, String>;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Ensure a JSON content type is present
///
/// Missing headers start out empty. An existing `content-type` entry is
/// kept as supplied; header names are matched case-insensitively, so a
/// caller's `Content-Type` also counts.
pub fn ensure_json_content_type(headers: Option<Headers>) -> Headers {
    let mut headers = headers.unwrap_or_default();
    let present = headers
        .keys()
        .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE));
    if !present {
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    }
    headers
}

/// Wrap a request function so it always receives a JSON content type
///
/// ```
/// use nestdiff_core::headers::{with_json_content_type, Headers};
///
/// let send = with_json_content_type(|headers: Headers| headers.len());
/// assert_eq!(send(None), 1);
/// ```
pub fn with_json_content_type<F, R>(method: F) -> impl Fn(Option<Headers>) -> R
where
    F: Fn(Headers) -> R,
{
    move |headers| method(ensure_json_content_type(headers))
}
