//! # Templates
//!
//! Named copies of a newsletter, kept as one JSON array under a single key
//! of a [`KeyValueStore`](newsletter_common::KeyValueStore).

mod error;
mod store;

pub use error::TemplateError;
pub use store::{TemplateStore, TEMPLATES_KEY};
