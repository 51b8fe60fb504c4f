//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="notion-blog {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Document title for a single page
pub fn page_title(slug: &str, site_title: &str) -> String {
    format!("{} - {}", slug, site_title)
}
