//! Render a single page to stdout

use anyhow::Result;

use crate::render;
use crate::Blog;

/// Print the rendered body of the page with the given slug
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    let page = blog.loader()?.get_by_slug(slug).await?;
    tracing::info!("Rendering {:?} ({} blocks)", page.title, page.blocks.len());

    println!("{}", render::render_html(&page.blocks));
    Ok(())
}
