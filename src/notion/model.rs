//! Notion object model
//!
//! Only the parts of the API payloads the blog reads are modelled. Anything
//! the blog does not understand deserializes to an `Unsupported` variant
//! instead of failing the whole response.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Style flags on a rich-text span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// A run of text sharing one set of annotations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RichText {
    pub plain_text: String,
    pub href: Option<String>,
    pub annotations: Annotations,
}

impl RichText {
    /// Unstyled text without a link
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Concatenate the plain text of every span
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}

/// A page row returned by a database query
#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub id: String,
    /// `None` for partial page objects that carry no properties
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Option<HashMap<String, PropertyValue>>,
}

/// A typed page property
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateValue {
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Property maps are decoded entry by entry so one malformed property only
/// loses itself.
fn lenient_properties<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, PropertyValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;

    Ok(raw.map(|map| {
        map.into_iter()
            .map(|(name, value)| {
                let value = serde_json::from_value(value).unwrap_or_else(|e| {
                    tracing::debug!("Unreadable property {:?}: {}", name, e);
                    PropertyValue::Unsupported
                });
                (name, value)
            })
            .collect()
    }))
}

/// A content block
///
/// Struct variants mirror the API layout, where the payload lives under a
/// key named after the block type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextBlock },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlock },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlock },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlock },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextBlock },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: TextBlock },
    #[serde(rename = "code")]
    Code { code: CodeBlock },
    #[serde(rename = "image")]
    Image { image: ImageBlock },
    #[serde(rename = "quote")]
    Quote { quote: TextBlock },
    #[serde(other)]
    Unsupported,
}

impl Block {
    /// Decode one block, degrading anything unreadable to `Unsupported`
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!("Unreadable block: {}", e);
            Block::Unsupported
        })
    }

    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Block::Paragraph {
            paragraph: TextBlock { rich_text },
        }
    }

    pub fn heading_1(rich_text: Vec<RichText>) -> Self {
        Block::Heading1 {
            heading_1: TextBlock { rich_text },
        }
    }

    pub fn heading_2(rich_text: Vec<RichText>) -> Self {
        Block::Heading2 {
            heading_2: TextBlock { rich_text },
        }
    }

    pub fn heading_3(rich_text: Vec<RichText>) -> Self {
        Block::Heading3 {
            heading_3: TextBlock { rich_text },
        }
    }

    pub fn bulleted(rich_text: Vec<RichText>) -> Self {
        Block::BulletedListItem {
            bulleted_list_item: TextBlock { rich_text },
        }
    }

    pub fn numbered(rich_text: Vec<RichText>) -> Self {
        Block::NumberedListItem {
            numbered_list_item: TextBlock { rich_text },
        }
    }

    pub fn quote(rich_text: Vec<RichText>) -> Self {
        Block::Quote {
            quote: TextBlock { rich_text },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    pub rich_text: Vec<RichText>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageBlock {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

impl ImageBlock {
    pub fn url(&self) -> &str {
        match &self.source {
            FileSource::External { external } => &external.url,
            FileSource::File { file } => &file.url,
        }
    }
}

/// Where an image lives: an external URL or a file uploaded to Notion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    External { external: FileUrl },
    File { file: FileUrl },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

/// One page of a paginated list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
