//! # Newsletter to Blocks
//!
//! One-way, lossy conversion from the flat extractor JSON into the editor's
//! block list. There is no inverse.

pub mod converter;
pub mod error;
pub mod layout;

pub use converter::convert;
pub use error::ConvertError;
pub use layout::{LayoutName, LayoutPreset, ProductArrangement};

#[cfg(test)]
mod tests;
