use crate::{EditBinding, Evaluator, RenderMode, VNode};
use newsletter_model::*;

fn blocks(json: serde_json::Value) -> Vec<ContentBlock> {
    serde_json::from_value(json).expect("Failed to parse blocks")
}

fn first(blocks: &[ContentBlock], mode: RenderMode) -> VNode {
    let theme = Theme::default();
    Evaluator::new(&theme, mode)
        .evaluate(blocks)
        .into_iter()
        .next()
        .expect("Expected one node")
}

#[test]
fn test_heading_uses_level_and_theme_font() {
    let list = blocks(serde_json::json!([
        { "id": "h", "type": "heading", "content": "Hi & bye", "level": 9 }
    ]));
    let node = first(&list, RenderMode::Preview);

    assert_eq!(node.tag(), Some("h6"));
    let styles = node.styles().unwrap();
    assert_eq!(styles.get("font-family"), Some("Georgia, serif"));
    assert_eq!(styles.get("text-align"), Some("left"));
    assert_eq!(styles.get("color"), Some("#333333"));
    assert!(node.to_html().contains("Hi &amp; bye"));
}

#[test]
fn test_preview_attaches_bindings() {
    let list = blocks(serde_json::json!([
        { "id": "b", "type": "button", "text": "Go", "url": "#" }
    ]));
    let node = first(&list, RenderMode::Preview);

    assert_eq!(node.bindings(), vec![&EditBinding::new("b", "text")]);
    assert!(node.to_html().contains("data-edit=\"text\""));
}

#[test]
fn test_export_has_no_bindings() {
    let list = blocks(serde_json::json!([
        { "id": "b", "type": "button", "text": "Go", "url": "#" },
        { "id": "q", "type": "quote", "content": "Wow", "author": "Ann" }
    ]));
    let theme = Theme::default();
    let nodes = Evaluator::export(&theme).evaluate(&list);

    assert!(nodes.iter().all(|n| n.bindings().is_empty()));
}

#[test]
fn test_unknown_block_placeholder_only_in_preview() {
    let list = blocks(serde_json::json!([
        { "id": "x", "type": "carousel" }
    ]));
    let theme = Theme::default();

    let preview = Evaluator::preview(&theme).evaluate(&list);
    assert!(matches!(&preview[0], VNode::Placeholder { block_id, .. } if block_id == "x"));

    let export = Evaluator::export(&theme).evaluate(&list);
    assert!(export.is_empty());
}

#[test]
fn test_image_with_link_is_wrapped() {
    let list = blocks(serde_json::json!([
        { "id": "i", "type": "image", "src": "a.png", "alt": "A", "link": "https://example.com" }
    ]));
    let html = first(&list, RenderMode::Export).to_html();

    assert!(html.contains("<a href=\"https://example.com\"><img src=\"a.png\" alt=\"A\""));
    assert!(html.contains("max-width: 100%"));
    assert!(html.contains("text-align: center"));
}

#[test]
fn test_html_block_is_injected_verbatim() {
    let list = blocks(serde_json::json!([
        { "id": "r", "type": "html", "content": "<table><tr><td>x</td></tr></table>" }
    ]));
    let html = first(&list, RenderMode::Export).to_html();
    assert!(html.contains("<table><tr><td>x</td></tr></table>"));
}

#[test]
fn test_columns_recurse_with_equal_shares() {
    let list = blocks(serde_json::json!([
        { "id": "c", "type": "columns", "columns": [
            { "blocks": [ { "id": "t1", "type": "text", "content": "<p>one</p>" } ] },
            { "blocks": [] },
            { "blocks": [] }
        ]}
    ]));
    let node = first(&list, RenderMode::Preview);
    let columns = node.children();

    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].styles().unwrap().get("flex"), Some("0 1 33.33%"));
    assert_eq!(columns[0].children().len(), 1);
    assert_eq!(node.styles().unwrap().get("gap"), Some("24px"));
    assert_eq!(node.bindings(), vec![&EditBinding::new("t1", "content")]);
}

#[test]
fn test_social_labels_are_initials() {
    let list = blocks(serde_json::json!([
        { "id": "s", "type": "social", "networks": [
            { "platform": "facebook", "url": "https://fb.example" },
            { "platform": "tiktok", "url": "https://tt.example" }
        ]}
    ]));
    let html = first(&list, RenderMode::Export).to_html();
    assert!(html.contains(">F</a>"));
    assert!(html.contains(">T</a>"));
    assert!(html.contains("font-size: 32px"));
}

#[test]
fn test_product_view_link_uses_primary() {
    let list = blocks(serde_json::json!([
        { "id": "p", "type": "product", "name": "Boot", "image": "", "link": "https://example.com/boot",
          "price": "$10" }
    ]));
    let theme = Theme::with_preset("Warm Earth").unwrap();
    let node = Evaluator::export(&theme).evaluate(&list).remove(0);
    let html = node.to_html();

    assert!(html.contains("View Product"));
    assert!(html.contains("background-color: #8b4513"));
    assert!(html.contains("$10"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_quote_author_footer() {
    let list = blocks(serde_json::json!([
        { "id": "q", "type": "quote", "content": "Less is more" , "author": "Mies" }
    ]));
    let html = first(&list, RenderMode::Export).to_html();
    assert!(html.contains("\u{2014} Mies"));
    assert!(html.contains("border-left: 4px solid #000000"));
}

#[test]
fn test_block_id_marks_outer_node() {
    let list = blocks(serde_json::json!([
        { "id": "sp", "type": "spacer", "height": "40px" }
    ]));
    let html = first(&list, RenderMode::Export).to_html();
    assert!(html.starts_with("<div style=\"height: 40px; line-height: 40px; font-size: 1px\" data-block-id=\"sp\">"));
}
