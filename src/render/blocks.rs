//! Block rendering with list grouping
//!
//! Blocks are rendered in a single fold. Consecutive list items of the same
//! kind collect in a pending buffer and are wrapped in one `ul`/`ol` when the
//! kind changes, a non-list block arrives, or the sequence ends.

use super::language::detect_language;
use super::node::{Node, Tag};
use super::rich_text::render_spans;
use crate::notion::model::{plain_text, CodeBlock, ImageBlock};
use crate::notion::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    fn container(self) -> Tag {
        match self {
            ListKind::Bulleted => Tag::Ul,
            ListKind::Numbered => Tag::Ol,
        }
    }
}

/// Fold state
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Accumulator {
    pub output: Vec<Node>,
    pub pending: Vec<Node>,
    pub pending_kind: Option<ListKind>,
}

/// Take the pending list items out of the accumulator as one container node
///
/// Returns `None` and leaves the accumulator untouched when nothing is pending.
pub fn flush(acc: Accumulator) -> (Accumulator, Option<Node>) {
    match acc.pending_kind {
        Some(kind) if !acc.pending.is_empty() => {
            let list = Node::element(kind.container(), acc.pending);
            let rest = Accumulator {
                output: acc.output,
                pending: Vec::new(),
                pending_kind: None,
            };
            (rest, Some(list))
        }
        _ => (acc, None),
    }
}

/// Flush and append the container, if any, to the output
fn flush_into_output(acc: Accumulator) -> Accumulator {
    let (mut acc, list) = flush(acc);
    acc.output.extend(list);
    acc
}

fn step(acc: Accumulator, block: &Block) -> Accumulator {
    match list_kind(block) {
        Some(kind) => {
            let mut acc = if acc.pending_kind != Some(kind) {
                flush_into_output(acc)
            } else {
                acc
            };
            acc.pending.extend(render_block(block));
            acc.pending_kind = Some(kind);
            acc
        }
        None => {
            let mut acc = flush_into_output(acc);
            acc.output.extend(render_block(block));
            acc
        }
    }
}

/// Render blocks into top-level nodes
pub fn render(blocks: &[Block]) -> Vec<Node> {
    let acc = blocks.iter().fold(Accumulator::default(), step);
    flush_into_output(acc).output
}

fn list_kind(block: &Block) -> Option<ListKind> {
    match block {
        Block::BulletedListItem { .. } => Some(ListKind::Bulleted),
        Block::NumberedListItem { .. } => Some(ListKind::Numbered),
        _ => None,
    }
}

/// Render a single block on its own
///
/// List items render as a bare `li`; grouping happens in [`render`].
/// Unsupported blocks render nothing.
pub fn render_block(block: &Block) -> Option<Node> {
    let node = match block {
        Block::Paragraph { paragraph } => {
            let lang = detect_language(&paragraph.rich_text);
            Node::element(Tag::P, render_spans(&paragraph.rich_text)).attr("lang", lang.as_str())
        }
        Block::Heading1 { heading_1 } => Node::element(Tag::H1, render_spans(&heading_1.rich_text)),
        Block::Heading2 { heading_2 } => Node::element(Tag::H2, render_spans(&heading_2.rich_text)),
        Block::Heading3 { heading_3 } => Node::element(Tag::H3, render_spans(&heading_3.rich_text)),
        Block::BulletedListItem { bulleted_list_item: item }
        | Block::NumberedListItem { numbered_list_item: item } => {
            Node::element(Tag::Li, render_spans(&item.rich_text))
        }
        Block::Quote { quote } => Node::element(Tag::Blockquote, render_spans(&quote.rich_text)),
        Block::Code { code } => render_code(code),
        Block::Image { image } => render_image(image),
        Block::Unsupported => return None,
    };
    Some(node)
}

fn render_code(code: &CodeBlock) -> Node {
    let mut inner = Node::element(Tag::Code, vec![Node::text(plain_text(&code.rich_text))]);
    if let Some(lang) = code.language.as_deref().filter(|l| *l != "plain text") {
        inner = inner.attr("class", format!("language-{}", lang.replace(' ', "-")));
    }
    Node::element(Tag::Pre, vec![inner])
}

fn render_image(image: &ImageBlock) -> Node {
    let caption = plain_text(&image.caption);
    let img = Node::element(Tag::Img, vec![])
        .attr("src", image.url())
        .attr("alt", caption.as_str());

    let mut children = vec![img];
    if !caption.is_empty() {
        children.push(Node::element(Tag::Figcaption, vec![Node::text(caption)]));
    }
    Node::element(Tag::Figure, children)
}
