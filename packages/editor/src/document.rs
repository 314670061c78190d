//! # Document Handle
//!
//! One editable newsletter: the block list plus the theme and email settings
//! that travel with it in a remix export.
//!
//! A Document can be:
//! - **Converted**: built from a newsletter by the converter
//! - **File-backed**: loaded from (and saved back to) a remix JSON file
//!
//! ## Lifecycle
//!
//! ```text
//! Newsletter → convert → Edit → Render / Export
//!                 ↑         ↓
//!            remix JSON ← save
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use newsletter_converter::{convert, LayoutPreset};
use newsletter_model::{
    renumber, BlockId, ContentBlock, EmailSettings, IDGenerator, Newsletter, Theme,
};

use crate::export::RemixExport;
use crate::{EditorError, Mutation, MutationResult};

#[derive(Debug)]
pub struct Document {
    /// Remix file this document was loaded from, if any
    pub path: Option<PathBuf>,

    /// Increments on each successful mutation
    pub version: u64,

    pub theme: Theme,
    pub settings: EmailSettings,

    blocks: Vec<ContentBlock>,
    ids: IDGenerator,
    dirty: bool,
}

impl Document {
    /// Convert a newsletter into a fresh document
    pub fn from_newsletter(newsletter: &Newsletter, preset: &LayoutPreset) -> Self {
        let mut ids = IDGenerator::new();
        let blocks = convert(newsletter, preset, &mut ids);
        Self {
            path: None,
            version: 0,
            theme: Theme::default(),
            settings: newsletter.email_settings(),
            blocks,
            ids,
            dirty: false,
        }
    }

    /// Wrap an existing block list.
    ///
    /// Blocks with an empty or repeated id get a fresh one and `order` is
    /// renumbered, so the invariants hold from the start.
    pub fn from_blocks(blocks: Vec<ContentBlock>, theme: Theme, settings: EmailSettings) -> Self {
        let mut ids = IDGenerator::new();
        let mut blocks = blocks;
        let mut seen = HashSet::new();
        normalize_ids(&mut blocks, &mut seen, &mut ids);
        renumber(&mut blocks);

        Self {
            path: None,
            version: 0,
            theme,
            settings,
            blocks,
            ids,
            dirty: false,
        }
    }

    pub fn from_remix(remix: RemixExport) -> Self {
        Self::from_blocks(remix.blocks, remix.theme, remix.metadata)
    }

    /// Load a remix export from disk (file-backed)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let mut doc = Self::from_remix(RemixExport::from_json(&source)?);
        doc.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), blocks = doc.blocks.len(), "loaded remix");
        Ok(doc)
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Apply a mutation; on error the blocks are unchanged
    pub fn apply(&mut self, mutation: &Mutation) -> Result<MutationResult, EditorError> {
        let created = mutation.apply(&mut self.blocks, &mut self.ids)?;
        self.version += 1;
        self.dirty = true;

        Ok(MutationResult {
            version: self.version,
            created,
        })
    }

    /// Replace the block list wholesale (used when stepping through history)
    pub fn restore(&mut self, blocks: Vec<ContentBlock>) {
        self.blocks = blocks;
        self.version += 1;
        self.dirty = true;
    }

    /// Next id from this document's generator
    pub fn new_id(&mut self) -> BlockId {
        self.ids.new_id()
    }

    pub fn to_remix(&self) -> RemixExport {
        RemixExport {
            metadata: self.settings.clone(),
            blocks: self.blocks.clone(),
            theme: self.theme.clone(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save back to the remix file this document came from
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NotFileBacked)?;
        self.save_as(path)
    }

    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_remix().to_json()?)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }
}

fn normalize_ids(
    blocks: &mut [ContentBlock],
    seen: &mut HashSet<BlockId>,
    ids: &mut IDGenerator,
) {
    for block in blocks {
        if block.id.is_empty() || seen.contains(&block.id) {
            let fresh = ids.new_id();
            tracing::warn!(old = %block.id, new = %fresh, "reassigned block id");
            block.id = fresh;
        }
        seen.insert(block.id.clone());

        if let Some(columns) = block.columns_mut() {
            for column in columns {
                normalize_ids(&mut column.blocks, seen, ids);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsletter_model::{is_contiguous, BlockKind, BlockType, SpacerBlock};

    fn spacer(id: &str) -> ContentBlock {
        ContentBlock::new(id, BlockKind::Spacer(SpacerBlock::default())).with_order(9)
    }

    #[test]
    fn test_from_blocks_normalizes() {
        let doc = Document::from_blocks(
            vec![spacer("a"), spacer(""), spacer("a")],
            Theme::default(),
            EmailSettings::default(),
        );

        let ids: HashSet<&str> = doc.blocks().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("a"));
        assert!(is_contiguous(doc.blocks()));
    }

    #[test]
    fn test_version_increments_on_success_only() {
        let mut doc =
            Document::from_blocks(vec![spacer("a")], Theme::default(), EmailSettings::default());
        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());

        let result = doc
            .apply(&Mutation::AddBlock {
                block_type: BlockType::Text,
                after_id: None,
            })
            .unwrap();
        assert_eq!(result.version, 1);
        assert!(result.created.is_some());

        let err = doc.apply(&Mutation::DeleteBlock {
            block_id: "missing".to_string(),
        });
        assert!(err.is_err());
        assert_eq!(doc.version, 1);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_save_requires_path() {
        let mut doc = Document::from_blocks(vec![], Theme::default(), EmailSettings::default());
        assert!(matches!(doc.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_from_newsletter_uses_email_settings() {
        let mut newsletter = Newsletter::default();
        newsletter.metadata.title = "Subject line".to_string();
        newsletter.metadata.brand = "Acme".to_string();

        let doc = Document::from_newsletter(&newsletter, &LayoutPreset::standard());
        assert_eq!(doc.settings.subject, "Subject line");
        assert_eq!(doc.settings.from_email, "newsletter@acme.com");
        assert!(doc.blocks().is_empty());
    }
}
