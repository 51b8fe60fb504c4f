//! Notion content source: object model, property extraction and API client

mod client;
mod error;
pub mod model;
mod properties;
mod query;

pub use client::{ContentSource, NotionClient, NotionClientFactory, SourceFactory};
pub use error::FetchError;
pub use model::{Annotations, Block, PageObject, PropertyValue, RichText};
pub use properties::{tags_property, text_property, TextKind};
pub use query::{DatabaseQuery, Direction, Filter, Sort};
