//! # Edit Session
//!
//! Ties a [`Document`] to its undo/redo history. The converted (or loaded)
//! block list is history entry 0; every successful mutation records a new
//! snapshot.

use newsletter_evaluator::EditBinding;
use newsletter_model::ContentBlock;
use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::{Document, EditorError, Mutation, MutationResult};

/// History moves, tagged the same way as [`Mutation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum HistoryOp {
    Undo,
    Redo,
}

/// One entry of an edit script: a mutation or a history move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditOp {
    History(HistoryOp),
    Mutation(Mutation),
}

pub struct EditSession {
    pub document: Document,
    history: History<Vec<ContentBlock>>,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self::with_max_levels(document, crate::history::DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(document: Document, max_levels: usize) -> Self {
        let mut history = History::with_max_levels(max_levels);
        history.record(document.blocks().to_vec());
        Self { document, history }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        self.document.blocks()
    }

    /// Apply a mutation and record the result in history
    pub fn apply(&mut self, mutation: &Mutation) -> Result<MutationResult, EditorError> {
        let result = self.document.apply(mutation)?;
        self.history.record(self.document.blocks().to_vec());
        Ok(result)
    }

    /// Apply an edit made through a preview node
    pub fn apply_edit(
        &mut self,
        binding: &EditBinding,
        value: &str,
    ) -> Result<MutationResult, EditorError> {
        self.apply(&Mutation::UpdateBlock {
            block_id: binding.block_id.clone(),
            patch: binding.patch(value),
        })
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.document.restore(snapshot.clone());
                true
            }
            None => false,
        }
    }

    /// Returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.document.restore(snapshot.clone());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Run one scripted operation
    pub fn run(&mut self, op: &EditOp) -> Result<(), EditorError> {
        match op {
            EditOp::Mutation(mutation) => {
                self.apply(mutation)?;
            }
            EditOp::History(HistoryOp::Undo) => {
                if !self.undo() {
                    tracing::warn!("nothing to undo");
                }
            }
            EditOp::History(HistoryOp::Redo) => {
                if !self.redo() {
                    tracing::warn!("nothing to redo");
                }
            }
        }
        Ok(())
    }

    /// Run a whole script, stopping at the first failing operation
    pub fn run_all(&mut self, ops: &[EditOp]) -> Result<(), EditorError> {
        for (index, op) in ops.iter().enumerate() {
            tracing::debug!(index, ?op, "running edit op");
            self.run(op)?;
        }
        Ok(())
    }
}
