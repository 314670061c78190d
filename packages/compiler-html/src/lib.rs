//! # HTML Compiler
//!
//! Serializes evaluated block trees into standalone HTML documents, and
//! renders the read-only newsletter viewer.
//!
//! Both outputs go through the same printer, so the export of a block list
//! carries exactly the inline styles the editor preview shows.

mod compiler;
mod context;
mod viewer;

pub use compiler::{compile_fragment, compile_to_html, CompileError};
pub use context::CompileOptions;
pub use viewer::{NewsletterView, Viewport};
