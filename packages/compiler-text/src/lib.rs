//! # Text Compiler
//!
//! Two plain-text outputs:
//!
//! - [`compile_newsletter`]: the viewer's text mode for a [`Newsletter`]
//! - [`compile_blocks`]: a block list flattened into typed [`TextLine`]s,
//!   which the PDF exporter lays out and [`render_lines`] prints

mod blocks;
mod markup;
mod newsletter;

pub use blocks::{compile_blocks, render_lines, LineKind, TextLine};
pub use markup::strip_markup;
pub use newsletter::compile_newsletter;
