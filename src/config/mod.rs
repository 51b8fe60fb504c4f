//! Configuration module

mod credentials;
mod site;

pub use credentials::{Credentials, NotionConfig};
pub use site::NavLink;
pub use site::NotionSettings;
pub use site::SiteConfig;
