//! # Newsletter Model
//!
//! Shared data types for the remix editor:
//!
//! - [`Newsletter`]: the flat JSON input shape (metadata, sections, images, products)
//! - [`ContentBlock`]: the editor's typed block tree
//! - [`Theme`]: global style fallbacks consumed by both renderers
//! - [`NewsletterTemplate`]: a named, persisted copy of a newsletter
//!
//! Blocks serialize with a `"type"` tag and camelCase style keys so exported
//! JSON stays readable by the original tooling.

pub mod block;
pub mod error;
pub mod factory;
pub mod id_generator;
mod lenient;
pub mod newsletter;
pub mod style;
pub mod template;
pub mod theme;
pub mod visitor;

pub use block::*;
pub use error::LoadError;
pub use factory::create_block;
pub use id_generator::IDGenerator;
pub use newsletter::*;
pub use style::*;
pub use template::{NewsletterTemplate, TemplateCategory};
pub use theme::{SpacingPreset, Theme, ThemeColors, ThemeFonts, ThemeSpacing};
pub use visitor::{collect_ids, count_blocks, reidentify, Visitor, VisitorMut};
