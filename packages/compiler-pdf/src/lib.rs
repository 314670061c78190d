//! # PDF Compiler
//!
//! Lays a block list out as text lines on a 600px column, scales the column
//! to the width of an A4 page and slices it into pages.
//!
//! ```text
//! blocks ──► compile_blocks ──► layout (px) ──► page_offsets (mm) ──► pdf-writer
//! ```

mod error;
mod layout;
mod pagination;
mod render;

pub use error::PdfError;
pub use layout::{layout, Layout, Placed, CONTENT_PADDING_PX};
pub use pagination::{page_count, page_offsets, px_to_mm, LOGICAL_WIDTH_PX, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use render::{compile_to_pdf, write_pdf, MAX_PAGES};
