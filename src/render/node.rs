//! Rendered node tree and its HTML serialization

use std::fmt::Write;

use crate::helpers::html_escape;

/// Element names the renderer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    P,
    H1,
    H2,
    H3,
    Ul,
    Ol,
    Li,
    Pre,
    Code,
    Figure,
    Img,
    Figcaption,
    Blockquote,
    A,
    Strong,
    Em,
    Del,
    U,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::Figure => "figure",
            Tag::Img => "img",
            Tag::Figcaption => "figcaption",
            Tag::Blockquote => "blockquote",
            Tag::A => "a",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Del => "del",
            Tag::U => "u",
        }
    }

    /// Elements written without a closing tag
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Img)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// A node in the rendered output
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag,
            attrs: Vec::new(),
            children,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Add an attribute; no-op on text nodes
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element(el) = &mut self {
            el.attrs.push((name, value.into()));
        }
        self
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element(el) => Some(el.tag),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Text(_) => &[],
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(el) => el
                .attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Serialize to HTML, escaping text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Element(el) => {
                let name = el.tag.as_str();
                out.push('<');
                out.push_str(name);
                for (key, value) in &el.attrs {
                    let _ = write!(out, r#" {}="{}""#, key, html_escape(value));
                }
                out.push('>');

                if el.tag.is_void() {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", name);
            }
        }
    }
}

/// Serialize a sequence of nodes
pub fn to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_nested() {
        let node = Node::element(
            Tag::P,
            vec![
                Node::text("Hello "),
                Node::element(Tag::Strong, vec![Node::text("world")]),
            ],
        )
        .attr("lang", "en");

        assert_eq!(node.to_html(), r#"<p lang="en">Hello <strong>world</strong></p>"#);
        assert_eq!(node.text_content(), "Hello world");
    }

    #[test]
    fn test_to_html_escapes() {
        let node = Node::element(Tag::A, vec![Node::text("a < b & c")])
            .attr("href", r#"https://example.com/?q="x"&y=1"#);

        assert_eq!(
            node.to_html(),
            r#"<a href="https://example.com/?q=&quot;x&quot;&amp;y=1">a &lt; b &amp; c</a>"#
        );
    }

    #[test]
    fn test_void_element() {
        let img = Node::element(Tag::Img, vec![])
            .attr("src", "/a.png")
            .attr("alt", "");
        assert_eq!(img.to_html(), r#"<img src="/a.png" alt="">"#);
    }

    #[test]
    fn test_attr_on_text_is_ignored() {
        let text = Node::text("plain").attr("class", "x");
        assert_eq!(text, Node::text("plain"));
        assert_eq!(text.get_attr("class"), None);
    }
}
