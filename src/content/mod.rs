//! Content module - fetches pages from Notion and normalizes them

pub mod loader;
mod page;

pub use loader::ContentLoader;
pub use page::{PageDetail, PageSummary, UNTITLED};
