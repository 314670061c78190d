//! Locating blocks inside nested column lists

use newsletter_model::{BlockId, ContentBlock};

/// Where a block lives: the chain of (block index, column index) steps from
/// the root list down to its containing list, then its index there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPath {
    pub parents: Vec<(usize, usize)>,
    pub index: usize,
}

pub fn locate(blocks: &[ContentBlock], id: &str) -> Option<BlockPath> {
    for (index, block) in blocks.iter().enumerate() {
        if block.id == id {
            return Some(BlockPath {
                parents: Vec::new(),
                index,
            });
        }
        if let Some(columns) = block.columns() {
            for (column_index, column) in columns.iter().enumerate() {
                if let Some(mut path) = locate(&column.blocks, id) {
                    path.parents.insert(0, (index, column_index));
                    return Some(path);
                }
            }
        }
    }
    None
}

/// The list a path points into
pub fn list_mut<'a>(
    blocks: &'a mut Vec<ContentBlock>,
    path: &BlockPath,
) -> Option<&'a mut Vec<ContentBlock>> {
    let mut list = blocks;
    for &(index, column) in &path.parents {
        list = &mut list.get_mut(index)?.columns_mut()?.get_mut(column)?.blocks;
    }
    Some(list)
}

pub fn find<'a>(blocks: &'a [ContentBlock], id: &str) -> Option<&'a ContentBlock> {
    blocks.iter().find_map(|block| {
        if block.id == id {
            return Some(block);
        }
        block
            .columns()?
            .iter()
            .find_map(|column| find(&column.blocks, id))
    })
}

/// Ids that occur more than once in the tree
pub fn duplicate_ids(blocks: &[ContentBlock]) -> Vec<BlockId> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for id in newsletter_model::collect_ids(blocks) {
        if !seen.insert(id) && !duplicates.iter().any(|d: &BlockId| d == id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsletter_model::*;

    fn tree() -> Vec<ContentBlock> {
        let nested = ContentBlock::new("inner", BlockKind::Spacer(SpacerBlock::default()));
        vec![
            ContentBlock::new("a", BlockKind::Divider(DividerBlock::default())),
            ContentBlock::new(
                "cols",
                BlockKind::Columns(ColumnsBlock {
                    columns: vec![
                        Column::default(),
                        Column {
                            blocks: vec![nested],
                            width: None,
                        },
                    ],
                    style: None,
                }),
            ),
        ]
    }

    #[test]
    fn test_locate_top_level_and_nested() {
        let blocks = tree();
        assert_eq!(
            locate(&blocks, "a"),
            Some(BlockPath {
                parents: vec![],
                index: 0
            })
        );
        assert_eq!(
            locate(&blocks, "inner"),
            Some(BlockPath {
                parents: vec![(1, 1)],
                index: 0
            })
        );
        assert_eq!(locate(&blocks, "missing"), None);
    }

    #[test]
    fn test_list_mut_follows_path() {
        let mut blocks = tree();
        let path = locate(&blocks, "inner").unwrap();
        let list = list_mut(&mut blocks, &path).unwrap();
        list.clear();
        assert!(find(&blocks, "inner").is_none());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut blocks = tree();
        blocks.push(ContentBlock::new("a", BlockKind::Unknown(Default::default())));
        assert_eq!(duplicate_ids(&blocks), vec!["a".to_string()]);
    }
}
