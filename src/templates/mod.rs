//! Built-in site templates using Tera template engine
//!
//! Templates are embedded in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{PageDetail, PageSummary};
use crate::helpers::{display_date, html_escape, meta_generator, page_href, page_title};
use crate::render;

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Rendered block HTML and URLs go in verbatim; text is escaped with
        // the `html_escape` filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("page.html", include_str!("site/page.html")),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/profile.html",
                include_str!("site/partials/profile.html"),
            ),
        ])?;

        tera.register_filter("html_escape", html_escape_filter);
        tera.register_filter("display_date", display_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the list of published pages
    pub fn render_index(&self, config: &SiteConfig, pages: &[PageSummary]) -> Result<String> {
        let mut context = base_context(config);
        let items: Vec<PageListItem> = pages.iter().map(PageListItem::from).collect();
        context.insert("pages", &items);
        self.render("index.html", &context)
    }

    /// Render a single page with its body
    pub fn render_page(&self, config: &SiteConfig, slug: &str, page: &PageDetail) -> Result<String> {
        let mut context = base_context(config);
        context.insert("title", &page_title(slug, &config.title));
        context.insert(
            "page",
            &PageHeader {
                title: page.title.clone(),
                date: page.date.clone(),
            },
        );
        context.insert("content", &render::render_html(&page.blocks));
        self.render("page.html", &context)
    }
}

fn base_context(config: &SiteConfig) -> Context {
    let mut context = Context::new();
    context.insert("site", &SiteData::from(config));
    context.insert("generator", &meta_generator());
    context
}

/// Tera filter: escape HTML special characters
fn html_escape_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("html_escape", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: format an ISO date string
fn display_date_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("display_date", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("display_date", "format", String, val),
        None => "YYYY.MM.DD".to_string(),
    };

    Ok(tera::Value::String(display_date(&s, &format)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub handle: String,
    pub language: String,
    pub avatar: String,
    pub date_format: String,
    pub links: Vec<NavData>,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            handle: config.handle.clone(),
            language: config.language.clone(),
            avatar: config.avatar.clone(),
            date_format: config.date_format.clone(),
            links: config
                .links
                .iter()
                .map(|link| NavData {
                    name: link.name.clone(),
                    href: link.href.clone(),
                    external: link.is_external(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavData {
    pub name: String,
    pub href: String,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageListItem {
    pub title: String,
    pub href: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl From<&PageSummary> for PageListItem {
    fn from(page: &PageSummary) -> Self {
        Self {
            title: page.title.clone(),
            href: page_href(&page.slug),
            date: page.date.clone(),
            tags: page.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageHeader {
    pub title: String,
    pub date: String,
}
