//! Page models

use serde::Serialize;

use crate::notion::Block;

/// Title used when a page has none
pub const UNTITLED: &str = "Untitled";

/// A published page as shown in the index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    /// Notion page id
    pub id: String,

    pub title: String,

    /// Routing key (`/{slug}`)
    pub slug: String,

    /// ISO date (`YYYY-MM-DD`), empty when unset
    pub date: String,

    pub tags: Vec<String>,
}

/// A single page with its body
#[derive(Debug, Clone, PartialEq)]
pub struct PageDetail {
    pub title: String,
    pub date: String,
    /// Top-level blocks in document order
    pub blocks: Vec<Block>,
}
