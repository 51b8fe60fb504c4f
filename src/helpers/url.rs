//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Link to a page by slug
///
/// # Examples
/// ```ignore
/// page_href("hello world") // -> "/hello%20world"
/// ```
pub fn page_href(slug: &str) -> String {
    format!("/{}", encode_segment(slug))
}
