//! # Newsletter Evaluator
//!
//! Turns a block list into a virtual DOM. The same tree backs the editable
//! preview (with [`EditBinding`]s on editable nodes) and the static HTML
//! export, and every inline style comes from [`StyleResolver`].

pub mod evaluator;
pub mod styles;
pub mod vdom;

#[cfg(test)]
mod tests_blocks;

pub use evaluator::{Evaluator, RenderMode};
pub use styles::{StyleResolver, Styles};
pub use vdom::{escape_html, is_void, open_tag_attributes, EditBinding, VNode};

/// Preview tree for `blocks`
pub fn preview(blocks: &[newsletter_model::ContentBlock], theme: &newsletter_model::Theme) -> Vec<VNode> {
    Evaluator::preview(theme).evaluate(blocks)
}
