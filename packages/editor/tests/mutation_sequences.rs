//! Mutation sequences against the list invariants
//!
//! This tests:
//! - `order` stays equal to the array index after every operation
//! - ids stay unique across the whole tree
//! - N undos followed by N redos land back on the same state

use newsletter_editor::{Document, EditSession, Mutation};
use newsletter_model::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn empty_session() -> EditSession {
    EditSession::with_max_levels(
        Document::from_blocks(vec![], Theme::default(), EmailSettings::default()),
        0,
    )
}

fn assert_invariants(blocks: &[ContentBlock]) {
    assert!(is_contiguous(blocks), "order not contiguous: {:?}", blocks);
    let all = collect_ids(blocks);
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len(), "duplicate ids: {:?}", all);
}

/// A step picks its target by position so it is meaningful for any list
#[derive(Debug, Clone)]
enum Step {
    Add(usize, Option<usize>),
    Delete(usize),
    Duplicate(usize),
    Reorder(usize, usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..BlockType::ALL.len(), proptest::option::of(0..16usize))
            .prop_map(|(t, after)| Step::Add(t, after)),
        (0..16usize).prop_map(Step::Delete),
        (0..16usize).prop_map(Step::Duplicate),
        (0..16usize, 0..16usize).prop_map(|(a, b)| Step::Reorder(a, b)),
    ]
}

fn to_mutation(step: &Step, blocks: &[ContentBlock]) -> Option<Mutation> {
    let id_at = |i: usize| blocks.get(i % blocks.len().max(1)).map(|b| b.id.clone());
    match step {
        Step::Add(t, after) => Some(Mutation::AddBlock {
            block_type: BlockType::ALL[*t],
            after_id: after.and_then(id_at),
        }),
        Step::Delete(i) => id_at(*i).map(|block_id| Mutation::DeleteBlock { block_id }),
        Step::Duplicate(i) => id_at(*i).map(|block_id| Mutation::DuplicateBlock { block_id }),
        Step::Reorder(a, b) if !blocks.is_empty() => Some(Mutation::ReorderBlock {
            from: a % blocks.len(),
            to: b % blocks.len(),
        }),
        Step::Reorder(..) => None,
    }
}

#[test]
fn test_add_duplicate_delete_chain() {
    let mut session = empty_session();
    let first = session
        .apply(&Mutation::AddBlock {
            block_type: BlockType::Columns,
            after_id: None,
        })
        .unwrap()
        .created
        .unwrap();
    session
        .apply(&Mutation::DuplicateBlock {
            block_id: first.clone(),
        })
        .unwrap();
    session
        .apply(&Mutation::DeleteBlock { block_id: first })
        .unwrap();

    assert_eq!(session.blocks().len(), 1);
    assert_invariants(session.blocks());

    assert!(session.undo());
    assert_eq!(session.blocks().len(), 2);
    assert!(session.undo());
    assert!(session.undo());
    assert!(session.blocks().is_empty());
    assert!(!session.undo());
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut session = empty_session();
    session
        .apply(&Mutation::AddBlock {
            block_type: BlockType::Text,
            after_id: None,
        })
        .unwrap();
    session.undo();
    assert!(session.can_redo());

    session
        .apply(&Mutation::AddBlock {
            block_type: BlockType::Spacer,
            after_id: None,
        })
        .unwrap();
    assert!(!session.can_redo());
    assert_eq!(session.blocks()[0].block_type(), Some(BlockType::Spacer));
}

proptest! {
    #[test]
    fn invariants_hold_after_every_step(steps in proptest::collection::vec(step(), 1..40)) {
        let mut session = empty_session();
        for step in &steps {
            if let Some(mutation) = to_mutation(step, session.blocks()) {
                session.apply(&mutation).unwrap();
            }
            assert_invariants(session.blocks());
        }
    }

    #[test]
    fn undo_then_redo_restores_state(steps in proptest::collection::vec(step(), 1..20)) {
        let mut session = empty_session();
        let mut applied = 0;
        for step in &steps {
            if let Some(mutation) = to_mutation(step, session.blocks()) {
                session.apply(&mutation).unwrap();
                applied += 1;
            }
        }
        let final_state = session.blocks().to_vec();

        for _ in 0..applied {
            prop_assert!(session.undo());
        }
        prop_assert!(session.blocks().is_empty());
        prop_assert!(!session.undo());

        for _ in 0..applied {
            prop_assert!(session.redo());
        }
        prop_assert_eq!(session.blocks(), final_state.as_slice());
        prop_assert!(!session.redo());
    }
}
