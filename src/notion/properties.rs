//! Property extraction with graceful defaults
//!
//! Metadata problems never block rendering: a property that is missing, has a
//! different type than expected, or is empty yields the caller's default.

use super::model::PropertyValue;

/// The kind a text-valued property is declared as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Title,
    RichText,
    Date,
}

/// Extract a string from a property declared as `kind`
///
/// Title and rich-text properties yield the plain text of their first span,
/// date properties their start date.
pub fn text_property(property: Option<&PropertyValue>, kind: TextKind, default: &str) -> String {
    let value = match (property, kind) {
        (Some(PropertyValue::Title { title }), TextKind::Title) => {
            title.first().map(|span| span.plain_text.as_str())
        }
        (Some(PropertyValue::RichText { rich_text }), TextKind::RichText) => {
            rich_text.first().map(|span| span.plain_text.as_str())
        }
        (Some(PropertyValue::Date { date }), TextKind::Date) => {
            date.as_ref().map(|d| d.start.as_str())
        }
        _ => None,
    };

    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Extract option names from a property declared as multi-select
pub fn tags_property(property: Option<&PropertyValue>, default: &[String]) -> Vec<String> {
    match property {
        Some(PropertyValue::MultiSelect { multi_select }) => {
            multi_select.iter().map(|o| o.name.clone()).collect()
        }
        _ => default.to_vec(),
    }
}
