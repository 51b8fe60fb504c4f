//! Content loader - fetches published pages from Notion and normalizes them

use std::collections::HashMap;

use super::page::{PageDetail, PageSummary, UNTITLED};
use crate::config::{Credentials, NotionSettings};
use crate::notion::{
    tags_property, text_property, ContentSource, DatabaseQuery, FetchError, Filter, PageObject,
    PropertyValue, Sort, SourceFactory, TextKind,
};

/// Loads pages from a content source using the configured schema
pub struct ContentLoader<'a> {
    source: Box<dyn ContentSource>,
    schema: &'a NotionSettings,
}

impl<'a> ContentLoader<'a> {
    /// Create a loader over an already connected source
    pub fn new(source: Box<dyn ContentSource>, schema: &'a NotionSettings) -> Self {
        Self { source, schema }
    }

    /// Resolve credentials and connect a fresh source
    pub fn connect(
        factory: &dyn SourceFactory,
        credentials: &Credentials,
        schema: &'a NotionSettings,
    ) -> Result<Self, FetchError> {
        let config = credentials.resolve()?;
        Ok(Self::new(factory.connect(&config), schema))
    }

    /// All published pages, newest first
    pub async fn list_published(&self) -> Result<Vec<PageSummary>, FetchError> {
        let query = DatabaseQuery::default()
            .filter(self.published_filter())
            .sort(Sort::descending(&self.schema.date_property));

        let pages = self.source.query(&query).await?;
        tracing::debug!("Fetched {} published pages", pages.len());

        Ok(pages
            .into_iter()
            .filter_map(|page| self.summarize(page))
            .collect())
    }

    /// The published page whose slug equals `slug`
    ///
    /// When several pages share a slug the first one returned wins.
    pub async fn get_by_slug(&self, slug: &str) -> Result<PageDetail, FetchError> {
        let query = DatabaseQuery::default().filter(Filter::And(vec![
            Filter::rich_text(&self.schema.slug_property, slug),
            self.published_filter(),
        ]));

        let mut pages = self.source.query(&query).await?;
        if pages.len() > 1 {
            tracing::warn!(
                "{} pages share slug {:?}; using the first",
                pages.len(),
                slug
            );
        }
        if pages.is_empty() {
            return Err(FetchError::NotFound(slug.to_string()));
        }

        let page = pages.swap_remove(0);
        let properties = page
            .properties
            .ok_or_else(|| FetchError::MalformedPage(page.id.clone()))?;

        let blocks = self.source.list_children(&page.id).await?;
        tracing::debug!("Page {:?} has {} blocks", slug, blocks.len());

        Ok(PageDetail {
            title: self.title(&properties),
            date: self.date(&properties),
            blocks,
        })
    }

    fn published_filter(&self) -> Filter {
        Filter::checkbox(&self.schema.published_property, true)
    }

    fn summarize(&self, page: PageObject) -> Option<PageSummary> {
        let Some(properties) = page.properties else {
            tracing::warn!("Skipping partial page object {}", page.id);
            return None;
        };

        Some(PageSummary {
            title: self.title(&properties),
            slug: text_property(
                properties.get(&self.schema.slug_property),
                TextKind::RichText,
                "",
            ),
            date: self.date(&properties),
            tags: tags_property(properties.get(&self.schema.tags_property), &[]),
            id: page.id,
        })
    }

    fn title(&self, properties: &HashMap<String, PropertyValue>) -> String {
        text_property(
            properties.get(&self.schema.title_property),
            TextKind::Title,
            UNTITLED,
        )
    }

    fn date(&self, properties: &HashMap<String, PropertyValue>) -> String {
        text_property(
            properties.get(&self.schema.date_property),
            TextKind::Date,
            "",
        )
    }
}
