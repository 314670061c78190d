//! Editing through preview bindings

use newsletter_evaluator::{preview, EditBinding, VNode};
use newsletter_model::*;

#[test]
fn test_every_editable_field_round_trips_through_a_patch() {
    let mut ids = IDGenerator::from_seed("e");
    let blocks: Vec<ContentBlock> = BlockType::ALL
        .iter()
        .map(|t| create_block(*t, &mut ids))
        .collect();

    let nodes = preview(&blocks, &Theme::default());
    let bindings: Vec<&EditBinding> = nodes.iter().flat_map(VNode::bindings).collect();
    assert!(!bindings.is_empty());

    for binding in bindings {
        let block = blocks
            .iter()
            .find(|b| b.id == binding.block_id)
            .expect("binding points at a block");

        let mut value = serde_json::to_value(block).unwrap();
        for (key, patch_value) in binding.patch("edited") {
            value[key] = patch_value;
        }
        let edited: ContentBlock = serde_json::from_value(value)
            .unwrap_or_else(|e| panic!("{} on {} is not patchable: {}", binding.field, block.id, e));
        assert_eq!(edited.block_type(), block.block_type());
    }
}

#[test]
fn test_preview_html_marks_blocks() {
    let mut ids = IDGenerator::from_seed("e");
    let blocks = vec![create_block(BlockType::Text, &mut ids)];
    let html = preview(&blocks, &Theme::default())[0].to_html();

    assert!(html.contains("data-block-id=\"e-1\""));
    assert!(html.contains("<p>Enter your text here...</p>"));
}
