//! # Block Mutations
//!
//! Structural operations on a block list.
//!
//! ## Mutation Semantics
//!
//! ### AddBlock
//! - New block with the type's default content and a fresh id
//! - Appended, or inserted right after `after_id` in whatever list holds it
//!
//! ### UpdateBlock
//! - Shallow merge: each top-level key of the patch replaces the block's key
//! - `id`, `type` and `order` are never changed by a patch
//!
//! ### DuplicateBlock
//! - Deep copy inserted right after the source
//! - The copy and every block nested in it get fresh ids
//!
//! ### ReorderBlock
//! - Array move-and-shift on the top-level list
//!
//! Every mutation is validated before anything is touched, so a failed
//! mutation leaves the list exactly as it was. Successful mutations end with
//! `order` renumbered to match array positions.

use newsletter_model::{
    create_block, reidentify, renumber, BlockId, BlockType, ContentBlock, IDGenerator,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::tree::{self, BlockPath};

const PROTECTED_KEYS: [&str; 3] = ["id", "type", "order"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op")]
pub enum Mutation {
    #[serde(rename = "add")]
    AddBlock {
        #[serde(rename = "type")]
        block_type: BlockType,
        #[serde(default, rename = "after", skip_serializing_if = "Option::is_none")]
        after_id: Option<BlockId>,
    },

    #[serde(rename = "update")]
    UpdateBlock {
        #[serde(rename = "id")]
        block_id: BlockId,
        patch: Map<String, Value>,
    },

    #[serde(rename = "delete")]
    DeleteBlock {
        #[serde(rename = "id")]
        block_id: BlockId,
    },

    #[serde(rename = "duplicate")]
    DuplicateBlock {
        #[serde(rename = "id")]
        block_id: BlockId,
    },

    #[serde(rename = "reorder")]
    ReorderBlock { from: usize, to: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid patch for block {block_id}: {reason}")]
    InvalidPatch { block_id: BlockId, reason: String },
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Block created by add or duplicate
    pub created: Option<BlockId>,
}

impl Mutation {
    /// Apply to `blocks`, drawing any new ids from `ids`.
    ///
    /// Returns the id of the block the mutation created, if any.
    pub fn apply(
        &self,
        blocks: &mut Vec<ContentBlock>,
        ids: &mut IDGenerator,
    ) -> Result<Option<BlockId>, MutationError> {
        let path = self.validate(blocks)?;

        let created = match self {
            Mutation::AddBlock { block_type, .. } => {
                let block = create_block(*block_type, ids);
                let id = block.id.clone();
                match &path {
                    Some(path) => insert_after(blocks, path, block)?,
                    None => blocks.push(block),
                }
                Some(id)
            }

            Mutation::UpdateBlock { block_id, patch } => {
                let path = require(path, block_id)?;
                let mut candidate = blocks.clone();
                let list = list_for(&mut candidate, &path, block_id)?;
                list[path.index] = Self::patched(&list[path.index], patch, ids)?;

                let duplicates = tree::duplicate_ids(&candidate);
                if !duplicates.is_empty() {
                    return Err(MutationError::InvalidPatch {
                        block_id: block_id.clone(),
                        reason: format!("duplicate block ids: {}", duplicates.join(", ")),
                    });
                }
                *blocks = candidate;
                None
            }

            Mutation::DeleteBlock { block_id } => {
                let path = require(path, block_id)?;
                list_for(blocks, &path, block_id)?.remove(path.index);
                None
            }

            Mutation::DuplicateBlock { block_id } => {
                let path = require(path, block_id)?;
                let list = list_for(blocks, &path, block_id)?;
                let mut copy = list[path.index].clone();
                reidentify(&mut copy, ids);
                let id = copy.id.clone();
                list.insert(path.index + 1, copy);
                Some(id)
            }

            Mutation::ReorderBlock { from, to } => {
                let block = blocks.remove(*from);
                blocks.insert(*to, block);
                None
            }
        };

        renumber(blocks);
        tracing::debug!(mutation = self.name(), blocks = blocks.len(), "applied mutation");
        Ok(created)
    }

    /// Check the mutation against `blocks` without changing them.
    ///
    /// Returns where the referenced block lives, when there is one.
    pub fn validate(&self, blocks: &[ContentBlock]) -> Result<Option<BlockPath>, MutationError> {
        let find = |id: &BlockId| {
            tree::locate(blocks, id).ok_or_else(|| MutationError::BlockNotFound(id.clone()))
        };

        match self {
            Mutation::AddBlock { after_id, .. } => after_id.as_ref().map(find).transpose(),

            Mutation::UpdateBlock { block_id, patch } => {
                let path = find(block_id)?;
                if let Some(key) = PROTECTED_KEYS.iter().find(|key| patch.contains_key(**key)) {
                    tracing::debug!(key, "ignoring protected key in patch");
                }
                Ok(Some(path))
            }

            Mutation::DeleteBlock { block_id } | Mutation::DuplicateBlock { block_id } => {
                find(block_id).map(Some)
            }

            Mutation::ReorderBlock { from, to } => {
                let len = blocks.len();
                for index in [*from, *to] {
                    if index >= len {
                        return Err(MutationError::IndexOutOfRange { index, len });
                    }
                }
                Ok(None)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "add",
            Mutation::UpdateBlock { .. } => "update",
            Mutation::DeleteBlock { .. } => "delete",
            Mutation::DuplicateBlock { .. } => "duplicate",
            Mutation::ReorderBlock { .. } => "reorder",
        }
    }

    /// `block` with `patch` merged over its JSON form
    fn patched(
        block: &ContentBlock,
        patch: &Map<String, Value>,
        ids: &mut IDGenerator,
    ) -> Result<ContentBlock, MutationError> {
        let invalid = |reason: String| MutationError::InvalidPatch {
            block_id: block.id.clone(),
            reason,
        };

        let mut value = serde_json::to_value(block).map_err(|e| invalid(e.to_string()))?;
        let object = value
            .as_object_mut()
            .ok_or_else(|| invalid("block is not a JSON object".to_string()))?;

        for (key, patch_value) in patch {
            if PROTECTED_KEYS.contains(&key.as_str()) {
                continue;
            }
            object.insert(key.clone(), patch_value.clone());
        }

        let mut updated: ContentBlock =
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        if updated.block_type() != block.block_type() {
            return Err(invalid("patch changed the block type".to_string()));
        }

        // Blocks nested through a `columns` patch may arrive without ids
        fill_missing_ids(&mut updated, ids);
        Ok(updated)
    }
}

fn require(path: Option<BlockPath>, id: &BlockId) -> Result<BlockPath, MutationError> {
    path.ok_or_else(|| MutationError::BlockNotFound(id.clone()))
}

fn list_for<'a>(
    blocks: &'a mut Vec<ContentBlock>,
    path: &BlockPath,
    id: &BlockId,
) -> Result<&'a mut Vec<ContentBlock>, MutationError> {
    tree::list_mut(blocks, path).ok_or_else(|| MutationError::BlockNotFound(id.clone()))
}

fn insert_after(
    blocks: &mut Vec<ContentBlock>,
    path: &BlockPath,
    block: ContentBlock,
) -> Result<(), MutationError> {
    let id = block.id.clone();
    let list = list_for(blocks, path, &id)?;
    list.insert(path.index + 1, block);
    Ok(())
}

fn fill_missing_ids(block: &mut ContentBlock, ids: &mut IDGenerator) {
    if let Some(columns) = block.columns_mut() {
        for column in columns {
            for child in &mut column.blocks {
                if child.id.is_empty() {
                    child.id = ids.new_id();
                }
                fill_missing_ids(child, ids);
            }
        }
    }
}
