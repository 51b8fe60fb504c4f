//! Notion credentials
//!
//! Credentials are captured once (CLI flags or environment) and handed to the
//! server as plain values. They are only checked when a request needs them, so
//! a missing key fails that request rather than startup.

use crate::notion::FetchError;

/// Credentials as provided, possibly incomplete
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub database_id: Option<String>,
}

/// Fully resolved connection settings for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionConfig {
    pub api_key: String,
    pub database_id: String,
}

impl Credentials {
    pub fn new(api_key: Option<String>, database_id: Option<String>) -> Self {
        Self {
            api_key,
            database_id,
        }
    }

    /// Resolve into a [`NotionConfig`], treating empty values as missing
    pub fn resolve(&self) -> Result<NotionConfig, FetchError> {
        let api_key =
            non_empty(&self.api_key).ok_or(FetchError::ConfigMissing("NOTION_API_KEY"))?;
        let database_id =
            non_empty(&self.database_id).ok_or(FetchError::ConfigMissing("NOTION_DATABASE_ID"))?;

        Ok(NotionConfig {
            api_key,
            database_id,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
