//! List published pages

use anyhow::Result;
use std::collections::HashMap;

use crate::content::PageSummary;
use crate::helpers::display_date;
use crate::Blog;

/// List published content by type
pub async fn run(blog: &Blog, content_type: &str) -> Result<()> {
    match content_type {
        "page" | "pages" => {
            let pages = blog.loader()?.list_published().await?;
            println!("Pages ({}):", pages.len());
            for page in &pages {
                println!("  {}", page_line(page, &blog.config.date_format));
            }
        }
        "tag" | "tags" => {
            let pages = blog.loader()?.list_published().await?;
            let tags = count_tags(&pages);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: page, tag", content_type);
        }
    }

    Ok(())
}

/// One line of the page listing
fn page_line(page: &PageSummary, date_format: &str) -> String {
    let mut line = format!(
        "{} - {} [{}]",
        display_date(&page.date, date_format),
        page.title,
        page.slug
    );
    if !page.tags.is_empty() {
        line.push_str(&format!(" #{}", page.tags.join(" #")));
    }
    line
}

/// Tags with page counts, most used first, then by name
fn count_tags(pages: &[PageSummary]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for page in pages {
        for tag in &page.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(slug: &str, date: &str, tags: &[&str]) -> PageSummary {
        PageSummary {
            id: slug.to_string(),
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_page_line() {
        assert_eq!(
            page_line(&page("intro", "2024-01-15", &["rust", "web"]), "YYYY.MM.DD"),
            "2024.01.15 - INTRO [intro] #rust #web"
        );
        assert_eq!(page_line(&page("bare", "", &[]), "YYYY.MM.DD"), " - BARE [bare]");
    }

    #[test]
    fn test_count_tags() {
        let pages = vec![
            page("a", "2024-01-01", &["rust", "notion"]),
            page("b", "2024-01-02", &["rust"]),
            page("c", "2024-01-03", &["axum"]),
        ];

        assert_eq!(
            count_tags(&pages),
            vec![
                ("rust".to_string(), 2),
                ("axum".to_string(), 1),
                ("notion".to_string(), 1),
            ]
        );
    }
}
