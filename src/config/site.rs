//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// Handle shown under the avatar (e.g. "@takewell")
    pub handle: String,
    pub language: String,

    // Profile
    pub avatar: String,
    pub static_dir: String,

    /// Date display format (Moment.js style)
    pub date_format: String,

    /// Navigation icon bar
    #[serde(default)]
    pub links: Vec<NavLink>,

    #[serde(default)]
    pub notion: NotionSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "takewell.app".to_string(),
            description: String::new(),
            author: "yuya takei".to_string(),
            handle: "@takewell".to_string(),
            language: "ja".to_string(),

            avatar: "/static/avatar.jpg".to_string(),
            static_dir: "static".to_string(),

            date_format: "YYYY.MM.DD".to_string(),

            links: vec![NavLink {
                name: "home".to_string(),
                href: "/".to_string(),
            }],

            notion: NotionSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a directory, falling back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");
        if config_path.exists() {
            tracing::debug!("Loading site config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// A link in the navigation icon bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    /// Icon name (home, github, x, mail, zenn, speakerdeck, facebook)
    pub name: String,
    pub href: String,
}

impl NavLink {
    /// Whether the link leaves the site
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Notion API endpoint and database schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    pub base_url: String,
    /// Value of the `Notion-Version` header
    pub version: String,
    pub title_property: String,
    pub slug_property: String,
    pub date_property: String,
    pub tags_property: String,
    pub published_property: String,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.notion.com/v1".to_string(),
            version: "2022-06-28".to_string(),
            title_property: "Title".to_string(),
            slug_property: "Slug".to_string(),
            date_property: "Date".to_string(),
            tags_property: "Tags".to_string(),
            published_property: "Published".to_string(),
        }
    }
}
