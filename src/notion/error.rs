//! Errors raised at the content-source boundary

use thiserror::Error;

/// Failure while fetching or normalizing content from Notion
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Required configuration is not set: {0}")]
    ConfigMissing(&'static str),

    #[error("Failed to fetch contents from Notion: {0}")]
    SourceUnavailable(String),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Invalid page data: {0}")]
    MalformedPage(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::SourceUnavailable(err.to_string())
    }
}
