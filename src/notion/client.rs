//! HTTP client for the Notion API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use super::model::{Block, ListResponse, PageObject};
use super::query::DatabaseQuery;
use super::FetchError;
use crate::config::{NotionConfig, NotionSettings};

const PAGE_SIZE: u32 = 100;

/// The narrow contract the blog needs from a content source
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Query the configured database, following pagination
    async fn query(&self, query: &DatabaseQuery) -> Result<Vec<PageObject>, FetchError>;

    /// List the child blocks of a page, following pagination
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, FetchError>;
}

/// Builds a content source from resolved per-request configuration
pub trait SourceFactory: Send + Sync {
    fn connect(&self, config: &NotionConfig) -> Box<dyn ContentSource>;
}

/// Notion REST client bound to one database
pub struct NotionClient {
    http: Client,
    base_url: String,
    version: String,
    api_key: String,
    database_id: String,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    #[serde(flatten)]
    query: &'a DatabaseQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
    page_size: u32,
}

impl NotionClient {
    pub fn new(config: &NotionConfig, settings: &NotionSettings) -> Self {
        Self {
            http: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            version: settings.version.clone(),
            api_key: config.api_key.clone(),
            database_id: config.database_id.clone(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.version)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ListResponse, FetchError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::SourceUnavailable(format!("{}: {}", status, body)));
        }

        Ok(response.json::<ListResponse>().await?)
    }
}

#[async_trait]
impl ContentSource for NotionClient {
    async fn query(&self, query: &DatabaseQuery) -> Result<Vec<PageObject>, FetchError> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = QueryBody {
                query,
                start_cursor: cursor.as_deref(),
                page_size: PAGE_SIZE,
            };
            let response = self.send(self.http.post(&url).json(&body)).await?;
            tracing::debug!(
                "Database query returned {} results (has_more: {})",
                response.results.len(),
                response.has_more
            );

            for value in response.results {
                match serde_json::from_value::<PageObject>(value) {
                    Ok(page) => pages.push(page),
                    Err(e) => tracing::warn!("Skipping unreadable page object: {}", e),
                }
            }

            match response.next_cursor {
                Some(next) if response.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(pages)
    }

    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>, FetchError> {
        let url = format!("{}/blocks/{}/children", self.base_url, block_id);
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut params = vec![("page_size", PAGE_SIZE.to_string())];
            if let Some(c) = &cursor {
                params.push(("start_cursor", c.clone()));
            }

            let response = self.send(self.http.get(&url).query(&params)).await?;
            tracing::debug!(
                "Block children of {} returned {} results",
                block_id,
                response.results.len()
            );
            blocks.extend(response.results.into_iter().map(Block::from_value));

            match response.next_cursor {
                Some(next) if response.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(blocks)
    }
}

/// Connects a fresh [`NotionClient`] for every request
#[derive(Debug, Clone, Default)]
pub struct NotionClientFactory {
    settings: NotionSettings,
}

impl NotionClientFactory {
    pub fn new(settings: NotionSettings) -> Self {
        Self { settings }
    }
}

impl SourceFactory for NotionClientFactory {
    fn connect(&self, config: &NotionConfig) -> Box<dyn ContentSource> {
        Box::new(NotionClient::new(config, &self.settings))
    }
}
