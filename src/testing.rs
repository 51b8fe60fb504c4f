//! In-memory content source for tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::NotionConfig;
use crate::notion::{
    Block, ContentSource, DatabaseQuery, FetchError, Filter, PageObject, SourceFactory,
};

/// A page object in Notion's JSON shape using the default schema
pub fn page_json(
    id: &str,
    title: &str,
    slug: &str,
    date: &str,
    tags: &[&str],
    published: bool,
) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Title": { "id": "title", "type": "title", "title": [{ "plain_text": title }] },
            "Slug": { "id": "slug", "type": "rich_text", "rich_text": [{ "plain_text": slug }] },
            "Date": { "id": "date", "type": "date", "date": { "start": date, "end": null } },
            "Tags": {
                "id": "tags",
                "type": "multi_select",
                "multi_select": tags.iter().map(|t| json!({ "name": t })).collect::<Vec<_>>()
            },
            "Published": { "id": "pub", "type": "checkbox", "checkbox": published }
        }
    })
}

/// Evaluates filters against stored pages the way the API would
#[derive(Clone, Default)]
pub struct FakeSource {
    pages: Vec<Value>,
    blocks: HashMap<String, Vec<Block>>,
    queries: Arc<Mutex<Vec<DatabaseQuery>>>,
    fail: bool,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: Value) -> Self {
        self.pages.push(page);
        self
    }

    pub fn with_blocks(mut self, page_id: &str, blocks: Vec<Block>) -> Self {
        self.blocks.insert(page_id.to_string(), blocks);
        self
    }

    /// Queries received so far, shared with clones
    pub fn queries(&self) -> Arc<Mutex<Vec<DatabaseQuery>>> {
        Arc::clone(&self.queries)
    }
}

fn filter_matches(filter: &Filter, page: &Value) -> bool {
    let properties = &page["properties"];
    // partial page objects slip through filters
    if properties.is_null() {
        return true;
    }

    match filter {
        Filter::CheckboxEquals { property, equals } => {
            properties[property.as_str()]["checkbox"].as_bool() == Some(*equals)
        }
        Filter::RichTextEquals { property, equals } => {
            properties[property.as_str()]["rich_text"][0]["plain_text"].as_str()
                == Some(equals.as_str())
        }
        Filter::And(filters) => filters.iter().all(|f| filter_matches(f, page)),
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn query(&self, query: &DatabaseQuery) -> Result<Vec<PageObject>, FetchError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(FetchError::SourceUnavailable("connection refused".to_string()));
        }

        Ok(self
            .pages
            .iter()
            .filter(|page| {
                query
                    .filter
                    .as_ref()
                    .map_or(true, |filter| filter_matches(filter, page))
            })
            .map(|page| serde_json::from_value::<PageObject>(page.clone()).unwrap())
            .collect())
    }

    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, FetchError> {
        if self.fail {
            return Err(FetchError::SourceUnavailable("connection refused".to_string()));
        }
        Ok(self.blocks.get(block_id).cloned().unwrap_or_default())
    }
}

/// Hands out clones of one [`FakeSource`] and counts connections
pub struct FakeFactory {
    source: FakeSource,
    connections: AtomicUsize,
}

impl FakeFactory {
    pub fn new(source: FakeSource) -> Self {
        Self {
            source,
            connections: AtomicUsize::new(0),
        }
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl SourceFactory for FakeFactory {
    fn connect(&self, _config: &NotionConfig) -> Box<dyn ContentSource> {
        self.connections.fetch_add(1, Ordering::SeqCst);
        Box::new(self.source.clone())
    }
}
