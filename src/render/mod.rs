//! Block renderer - turns Notion blocks into a node tree

mod blocks;
mod language;
mod node;
mod rich_text;

pub use blocks::{flush, render, render_block, Accumulator, ListKind};
pub use language::{detect_language, detect_text, Language};
pub use node::{to_html, Element, Node, Tag};
pub use rich_text::{render_span, render_spans};

use crate::notion::Block;

/// Render blocks straight to an HTML fragment
pub fn render_html(blocks: &[Block]) -> String {
    to_html(&render(blocks))
}
