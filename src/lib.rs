//! notion-blog: a personal blog served straight from a Notion database
//!
//! Pages are fetched from Notion on every request, their blocks rendered to
//! HTML and wrapped in the built-in Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod notion;
pub mod render;
pub mod server;
pub mod templates;

#[cfg(test)]
mod testing;

use anyhow::Result;
use std::path::Path;

use config::{Credentials, SiteConfig};
use content::ContentLoader;
use notion::{FetchError, NotionClientFactory};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: SiteConfig,
    /// Notion credentials, checked when first needed
    pub credentials: Credentials,
    /// Static assets directory (avatar, stylesheet)
    pub static_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new blog from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P, credentials: Credentials) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = SiteConfig::load_or_default(&base_dir)?;
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            credentials,
            static_dir,
        })
    }

    /// Connect a content loader to the Notion API
    pub fn loader(&self) -> Result<ContentLoader<'_>, FetchError> {
        let factory = NotionClientFactory::new(self.config.notion.clone());
        ContentLoader::connect(&factory, &self.credentials, &self.config.notion)
    }

    /// Serve the blog over HTTP
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        server::start(self, ip, port).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path(), Credentials::default()).unwrap();

        assert_eq!(blog.config.title, "takewell.app");
        assert_eq!(blog.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_new_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "title: Field Notes\nstatic_dir: public\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path(), Credentials::default()).unwrap();
        assert_eq!(blog.config.title, "Field Notes");
        assert_eq!(blog.static_dir, dir.path().join("public"));
    }

    #[test]
    fn test_loader_requires_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path(), Credentials::default()).unwrap();
        assert!(matches!(blog.loader(), Err(FetchError::ConfigMissing(_))));

        let blog = Blog::new(
            dir.path(),
            Credentials::new(Some("key".into()), Some("db".into())),
        )
        .unwrap();
        assert!(blog.loader().is_ok());
    }
}
