//! # Newsletter Editor
//!
//! Block list editing engine for the newsletter remix editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ converter: Newsletter → blocks              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document + mutations + history      │
//! │  - Add / update / delete / duplicate        │
//! │  - Reorder with contiguous `order`          │
//! │  - Snapshot undo/redo                       │
//! │  - Remix JSON load/save                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator / compilers: blocks → output      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Blocks are the source of truth**: previews and exports are derived
//! 2. **All-or-nothing mutations**: a failed mutation changes nothing
//! 3. **Full snapshots**: undo restores a copy, never replays inverses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newsletter_editor::{Document, EditSession, Mutation};
//!
//! let doc = Document::from_newsletter(&newsletter, &LayoutPreset::standard());
//! let mut session = EditSession::new(doc);
//!
//! session.apply(&Mutation::AddBlock { block_type: BlockType::Divider, after_id: None })?;
//! session.undo();
//!
//! let remix = session.document.to_remix();
//! ```

mod document;
mod errors;
mod export;
mod history;
mod mutations;
mod session;
pub mod tree;

pub use document::Document;
pub use errors::EditorError;
pub use export::{unix_millis, ExportKind, RemixExport};
pub use history::{History, DEFAULT_MAX_LEVELS};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use session::{EditOp, EditSession, HistoryOp};
