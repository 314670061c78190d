use crate::block::*;
use crate::id_generator::IDGenerator;

/// Visitor pattern for traversing block trees immutably
///
/// Default implementations walk into every column. Override specific
/// visit_* methods to act on blocks.
pub trait Visitor: Sized {
    fn visit_block(&mut self, block: &ContentBlock) {
        walk_block(self, block);
    }

    fn visit_column(&mut self, column: &Column) {
        walk_column(self, column);
    }
}

/// Mutable visitor for rewriting blocks in place
pub trait VisitorMut: Sized {
    fn visit_block_mut(&mut self, block: &mut ContentBlock) {
        walk_block_mut(self, block);
    }

    fn visit_column_mut(&mut self, column: &mut Column) {
        walk_column_mut(self, column);
    }
}

pub fn walk_blocks<V: Visitor>(visitor: &mut V, blocks: &[ContentBlock]) {
    for block in blocks {
        visitor.visit_block(block);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &ContentBlock) {
    if let Some(columns) = block.columns() {
        for column in columns {
            visitor.visit_column(column);
        }
    }
}

pub fn walk_column<V: Visitor>(visitor: &mut V, column: &Column) {
    walk_blocks(visitor, &column.blocks);
}

pub fn walk_blocks_mut<V: VisitorMut>(visitor: &mut V, blocks: &mut [ContentBlock]) {
    for block in blocks {
        visitor.visit_block_mut(block);
    }
}

pub fn walk_block_mut<V: VisitorMut>(visitor: &mut V, block: &mut ContentBlock) {
    if let Some(columns) = block.columns_mut() {
        for column in columns {
            visitor.visit_column_mut(column);
        }
    }
}

pub fn walk_column_mut<V: VisitorMut>(visitor: &mut V, column: &mut Column) {
    walk_blocks_mut(visitor, &mut column.blocks);
}

struct IdCollector<'a> {
    ids: Vec<&'a str>,
}

impl<'a> IdCollector<'a> {
    fn collect(blocks: &'a [ContentBlock]) -> Vec<&'a str> {
        let mut collector = Self { ids: Vec::new() };
        for block in blocks {
            collector.push(block);
        }
        collector.ids
    }

    // Lifetimes on the trait methods don't line up with `'a`, so walk by hand.
    fn push(&mut self, block: &'a ContentBlock) {
        self.ids.push(&block.id);
        if let Some(columns) = block.columns() {
            for column in columns {
                for child in &column.blocks {
                    self.push(child);
                }
            }
        }
    }
}

/// Every block id in the tree, depth first
pub fn collect_ids(blocks: &[ContentBlock]) -> Vec<&str> {
    IdCollector::collect(blocks)
}

struct Counter(usize);

impl Visitor for Counter {
    fn visit_block(&mut self, block: &ContentBlock) {
        self.0 += 1;
        walk_block(self, block);
    }
}

/// Number of blocks in the tree, nested ones included
pub fn count_blocks(blocks: &[ContentBlock]) -> usize {
    let mut counter = Counter(0);
    walk_blocks(&mut counter, blocks);
    counter.0
}

/// Assigns a fresh id to every block it visits
pub struct Reidentify<'a> {
    pub ids: &'a mut IDGenerator,
}

impl VisitorMut for Reidentify<'_> {
    fn visit_block_mut(&mut self, block: &mut ContentBlock) {
        block.id = self.ids.new_id();
        walk_block_mut(self, block);
    }
}

/// Give `block` and everything nested in it new ids
pub fn reidentify(block: &mut ContentBlock, ids: &mut IDGenerator) {
    Reidentify { ids }.visit_block_mut(block);
}
