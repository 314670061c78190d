use crate::{convert, LayoutName, LayoutPreset};
use newsletter_model::*;

fn newsletter(source: &str) -> Newsletter {
    Newsletter::from_json(source).expect("Failed to parse newsletter")
}

fn types(blocks: &[ContentBlock]) -> Vec<&'static str> {
    blocks.iter().map(|b| b.kind.type_name()).collect()
}

fn products(count: usize) -> Newsletter {
    let mut newsletter = Newsletter::default();
    newsletter.content.products = (0..count)
        .map(|i| Product {
            name: format!("Product {}", i),
            image: format!("https://example.com/{}.jpg", i),
            link: format!("https://example.com/{}", i),
            description: None,
        })
        .collect();
    newsletter
}

/// Blocks with ids cleared, for comparing two conversions
fn without_ids(mut blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
    struct ClearIds;
    impl VisitorMut for ClearIds {
        fn visit_block_mut(&mut self, block: &mut ContentBlock) {
            block.id.clear();
            visitor::walk_block_mut(self, block);
        }
    }
    visitor::walk_blocks_mut(&mut ClearIds, &mut blocks);
    blocks
}

const HERO_AND_TWO_SECTIONS: &str = r#"{
    "metadata": { "brand": "Acme", "title": "Hello" },
    "content": {
        "images": [
            { "url": "https://example.com/hero.jpg", "alt": "Hero", "type": "hero" },
            { "url": "https://example.com/logo.png", "alt": "Logo", "type": "general" }
        ],
        "sections": [
            { "title": "First", "type": "headline", "description": "One",
              "cta": { "text": "Go", "url": "https://example.com/go" } },
            { "title": "Second", "type": "text", "description": "Two" }
        ],
        "products": []
    }
}"#;

#[test]
fn test_hero_and_two_sections() {
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&newsletter(HERO_AND_TWO_SECTIONS), &LayoutPreset::standard(), &mut ids);

    assert_eq!(
        types(&blocks),
        vec!["image", "spacer", "heading", "text", "button", "spacer", "heading", "text"]
    );
    assert!(is_contiguous(&blocks));

    match &blocks[0].kind {
        BlockKind::Image(image) => {
            assert_eq!(image.src, "https://example.com/hero.jpg");
            assert_eq!(image.alt, "Hero");
        }
        other => panic!("Expected image, got {:?}", other),
    }
    match &blocks[3].kind {
        BlockKind::Text(text) => assert_eq!(text.content, "<p>One</p>"),
        other => panic!("Expected text, got {:?}", other),
    }
    match &blocks[4].kind {
        BlockKind::Button(button) => {
            assert_eq!(button.text, "Go");
            assert_eq!(button.url, "https://example.com/go");
        }
        other => panic!("Expected button, got {:?}", other),
    }
}

#[test]
fn test_spacer_heights_follow_preset() {
    let source = newsletter(HERO_AND_TWO_SECTIONS);
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&source, &LayoutPreset::standard(), &mut ids);

    let heights: Vec<&str> = blocks
        .iter()
        .filter_map(|b| match &b.kind {
            BlockKind::Spacer(spacer) => Some(spacer.height.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(heights, vec!["32px", "48px"]);
}

#[test]
fn test_empty_newsletter_has_no_blocks() {
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&Newsletter::default(), &LayoutPreset::standard(), &mut ids);
    assert!(blocks.is_empty());
}

#[test]
fn test_section_without_body_or_cta() {
    let source = newsletter(r#"{"content": {"sections": [{"title": "Only"}]}}"#);
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&source, &LayoutPreset::standard(), &mut ids);
    assert_eq!(types(&blocks), vec!["heading"]);
}

#[test]
fn test_section_content_used_when_description_missing() {
    let source = newsletter(r#"{"content": {"sections": [{"title": "T", "content": "Body"}]}}"#);
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&source, &LayoutPreset::standard(), &mut ids);
    match &blocks[1].kind {
        BlockKind::Text(text) => assert_eq!(text.content, "<p>Body</p>"),
        other => panic!("Expected text, got {:?}", other),
    }
}

#[test]
fn test_odd_products_make_a_short_last_row() {
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&products(3), &LayoutPreset::standard(), &mut ids);

    assert_eq!(types(&blocks), vec!["divider", "heading", "columns", "columns"]);
    assert_eq!(blocks[2].columns().unwrap().len(), 2);

    let last = blocks[3].columns().unwrap();
    assert_eq!(last.len(), 1);
    match &last[0].blocks[0].kind {
        BlockKind::Product(product) => assert_eq!(product.name, "Product 2"),
        other => panic!("Expected product, got {:?}", other),
    }
}

#[test]
fn test_products_heading() {
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&products(1), &LayoutPreset::standard(), &mut ids);
    match &blocks[1].kind {
        BlockKind::Heading(heading) => assert_eq!(heading.content, "Featured Products"),
        other => panic!("Expected heading, got {:?}", other),
    }
}

#[test]
fn test_stacked_layout_lists_products() {
    let mut ids = IDGenerator::from_seed("t");
    let preset = LayoutPreset::named(LayoutName::Stacked);
    let blocks = convert(&products(3), &preset, &mut ids);
    assert_eq!(
        types(&blocks),
        vec!["divider", "heading", "product", "product", "product"]
    );
}

#[test]
fn test_missing_product_link_becomes_hash() {
    let mut source = products(1);
    source.content.products[0].link.clear();
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&source, &LayoutPreset::named(LayoutName::Stacked), &mut ids);
    match &blocks[2].kind {
        BlockKind::Product(product) => assert_eq!(product.link, "#"),
        other => panic!("Expected product, got {:?}", other),
    }
}

#[test]
fn test_brand_layout_centers_headings() {
    let mut ids = IDGenerator::from_seed("t");
    let blocks = convert(&newsletter(HERO_AND_TWO_SECTIONS), &LayoutPreset::brand(), &mut ids);
    match &blocks[2].kind {
        BlockKind::Heading(heading) => {
            let style = heading.style.as_ref().unwrap();
            assert_eq!(style.text_align, Some(Alignment::Center));
        }
        other => panic!("Expected heading, got {:?}", other),
    }
    match &blocks[4].kind {
        BlockKind::Button(button) => {
            let style = button.style.as_ref().unwrap();
            assert_eq!(style.border_radius.as_deref(), Some("24px"));
            assert_eq!(style.background_color.as_deref(), Some("#000000"));
        }
        other => panic!("Expected button, got {:?}", other),
    }
}

#[test]
fn test_deterministic_modulo_ids() {
    let mut source = newsletter(HERO_AND_TWO_SECTIONS);
    source.content.products = products(5).content.products;

    for name in LayoutName::ALL {
        let preset = LayoutPreset::named(name);
        let a = convert(&source, &preset, &mut IDGenerator::new());
        let b = convert(&source, &preset, &mut IDGenerator::new());
        assert_ne!(a[0].id, b[0].id);
        assert_eq!(without_ids(a), without_ids(b));
    }
}

#[test]
fn test_layout_name_parse() {
    assert_eq!("Brand".parse::<LayoutName>().unwrap(), LayoutName::Brand);
    assert!("fancy".parse::<LayoutName>().is_err());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grid_rows_are_half_the_products_rounded_up(count in 1..40usize) {
            let mut ids = IDGenerator::from_seed("p");
            let blocks = convert(&products(count), &LayoutPreset::standard(), &mut ids);

            let rows: Vec<&ContentBlock> = blocks
                .iter()
                .filter(|b| b.block_type() == Some(BlockType::Columns))
                .collect();
            prop_assert_eq!(rows.len(), (count + 1) / 2);

            let last_width = rows.last().unwrap().columns().unwrap().len();
            prop_assert_eq!(last_width, if count % 2 == 1 { 1 } else { 2 });
        }

        #[test]
        fn ids_are_unique(sections in 0..10usize, count in 0..10usize) {
            let mut source = products(count);
            source.content.sections = (0..sections)
                .map(|i| Section {
                    title: format!("S{}", i),
                    description: Some("d".to_string()),
                    ..Default::default()
                })
                .collect();

            let mut ids = IDGenerator::from_seed("p");
            let blocks = convert(&source, &LayoutPreset::standard(), &mut ids);
            let all = collect_ids(&blocks);
            let unique: std::collections::HashSet<&str> = all.iter().copied().collect();
            prop_assert_eq!(all.len(), unique.len());
            prop_assert!(is_contiguous(&blocks));
        }
    }
}
