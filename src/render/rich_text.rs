//! Inline rich-text composition

use super::node::{Node, Tag};
use crate::notion::RichText;

/// Render one span
///
/// A linked span renders as a bare link and ignores its annotations; a link
/// with an unsafe scheme degrades to its bare text. Otherwise annotations wrap the text in a fixed order, bold innermost:
/// bold, italic, strikethrough, underline, code.
pub fn render_span(span: &RichText) -> Node {
    let text = Node::text(span.plain_text.as_str());

    if let Some(href) = &span.href {
        if !is_safe_href(href) {
            tracing::debug!("Dropping link with unsafe scheme: {:?}", href);
            return text;
        }
        return Node::element(Tag::A, vec![text]).attr("href", href.as_str());
    }

    let a = &span.annotations;
    [
        (a.bold, Tag::Strong),
        (a.italic, Tag::Em),
        (a.strikethrough, Tag::Del),
        (a.underline, Tag::U),
        (a.code, Tag::Code),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .fold(text, |inner, (_, tag)| Node::element(tag, vec![inner]))
}

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Relative links and http(s)/mailto targets
fn is_safe_href(href: &str) -> bool {
    let href = href.trim();
    match href.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if href[i..].starts_with(':') => SAFE_SCHEMES
            .iter()
            .any(|scheme| href[..i].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}

/// Render spans in order
pub fn render_spans(spans: &[RichText]) -> Vec<Node> {
    spans.iter().map(render_span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::Annotations;

    fn all_flags() -> Annotations {
        Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            underline: true,
            code: true,
        }
    }

    /// Every combination of the five flags
    fn flag_combinations() -> Vec<Annotations> {
        (0u8..32)
            .map(|bits| Annotations {
                bold: bits & 1 != 0,
                italic: bits & 2 != 0,
                strikethrough: bits & 4 != 0,
                underline: bits & 8 != 0,
                code: bits & 16 != 0,
            })
            .collect()
    }

    /// Tag chain from outermost element down to the text
    fn tag_chain(node: &Node) -> Vec<Tag> {
        let mut tags = Vec::new();
        let mut current = node;
        while let Some(tag) = current.tag() {
            tags.push(tag);
            current = &current.children()[0];
        }
        tags
    }

    #[test]
    fn test_plain_span_is_bare_text() {
        assert_eq!(render_span(&RichText::plain("hi")), Node::text("hi"));
    }

    #[test]
    fn test_link_ignores_annotations() {
        let expected = render_span(&RichText::plain("docs").with_href("https://docs.rs"));
        assert_eq!(expected.to_html(), r#"<a href="https://docs.rs">docs</a>"#);

        for flags in flag_combinations() {
            let span = RichText::plain("docs")
                .with_href("https://docs.rs")
                .with_annotations(flags);
            assert_eq!(render_span(&span), expected);
        }
    }

    #[test]
    fn test_all_flags_nesting_order() {
        let span = RichText::plain("x").with_annotations(all_flags());
        assert_eq!(
            render_span(&span).to_html(),
            "<code><u><del><em><strong>x</strong></em></del></u></code>"
        );
    }

    #[test]
    fn test_nesting_order_for_every_combination() {
        let order = [Tag::Strong, Tag::Em, Tag::Del, Tag::U, Tag::Code];

        for flags in flag_combinations() {
            let node = render_span(&RichText::plain("x").with_annotations(flags));
            let mut chain = tag_chain(&node);
            chain.reverse();

            let expected: Vec<Tag> = order
                .iter()
                .zip([
                    flags.bold,
                    flags.italic,
                    flags.strikethrough,
                    flags.underline,
                    flags.code,
                ])
                .filter(|(_, on)| *on)
                .map(|(tag, _)| *tag)
                .collect();

            assert_eq!(chain, expected, "flags: {:?}", flags);
            assert_eq!(node.text_content(), "x");
        }
    }

    #[test]
    fn test_render_spans_keeps_order() {
        let spans = vec![
            RichText::plain("a "),
            RichText::plain("b").with_annotations(Annotations {
                italic: true,
                ..Default::default()
            }),
            RichText::plain(" c"),
        ];
        let html: String = render_spans(&spans).iter().map(Node::to_html).collect();
        assert_eq!(html, "a <em>b</em> c");
    }

    #[test]
    fn test_link_schemes() {
        for href in [
            "https://example.com",
            "HTTP://example.com",
            "mailto:me@example.com",
            "/0f3c9a",
            "#section",
            "page?x=a:b",
        ] {
            let node = render_span(&RichText::plain("t").with_href(href));
            assert_eq!(node.tag(), Some(Tag::A), "{}", href);
            assert_eq!(node.get_attr("href"), Some(href));
        }

        for href in ["javascript:alert(1)", " JavaScript:alert(1)", "data:text/html,x"] {
            let span = RichText::plain("t")
                .with_href(href)
                .with_annotations(all_flags());
            assert_eq!(render_span(&span), Node::text("t"), "{}", href);
        }
    }
}
