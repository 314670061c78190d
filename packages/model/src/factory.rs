//! Default blocks for the "add block" menu

use crate::block::*;
use crate::id_generator::IDGenerator;
use crate::style::*;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Build a new block of `block_type` with its starter content and style.
///
/// The block gets a fresh id; `order` is left at 0 for the caller to
/// renumber once the block is placed.
pub fn create_block(block_type: BlockType, ids: &mut IDGenerator) -> ContentBlock {
    let kind = match block_type {
        BlockType::Text => BlockKind::Text(TextBlock {
            content: "<p>Enter your text here...</p>".to_string(),
            style: Some(TextStyle {
                font_size: s("16px"),
                color: s("#333333"),
                text_align: Some(Alignment::Left),
                ..Default::default()
            }),
        }),

        BlockType::Heading => BlockKind::Heading(HeadingBlock {
            content: "Heading".to_string(),
            level: 2,
            style: Some(HeadingStyle {
                font_size: s("24px"),
                color: s("#111111"),
                text_align: Some(Alignment::Left),
                ..Default::default()
            }),
        }),

        BlockType::Image => BlockKind::Image(ImageBlock {
            src: String::new(),
            alt: String::new(),
            link: None,
            style: Some(ImageStyle {
                max_width: s("100%"),
                alignment: Some(Alignment::Center),
                ..Default::default()
            }),
        }),

        BlockType::Button => BlockKind::Button(ButtonBlock {
            text: "Click Here".to_string(),
            url: "#".to_string(),
            style: Some(ButtonStyle {
                background_color: s("#000000"),
                text_color: s("#ffffff"),
                border_radius: s("24px"),
                font_size: s("16px"),
                padding: s("12px 24px"),
                alignment: Some(Alignment::Center),
                ..Default::default()
            }),
        }),

        BlockType::Divider => BlockKind::Divider(DividerBlock {
            style: Some(DividerStyle {
                border_color: s("#e5e5e5"),
                border_width: s("1px"),
                border_style: Some(BorderStyle::Solid),
                margin: s("32px 0"),
            }),
        }),

        BlockType::Spacer => BlockKind::Spacer(SpacerBlock {
            height: "32px".to_string(),
        }),

        BlockType::Columns => BlockKind::Columns(ColumnsBlock {
            columns: vec![
                Column {
                    blocks: Vec::new(),
                    width: s("50%"),
                },
                Column {
                    blocks: Vec::new(),
                    width: s("50%"),
                },
            ],
            style: Some(ColumnsStyle {
                gap: s("24px"),
                stack_on_mobile: Some(true),
            }),
        }),

        BlockType::Product => BlockKind::Product(ProductBlock {
            name: "Product Name".to_string(),
            image: String::new(),
            link: "#".to_string(),
            description: s("Product description"),
            price: s("$99.99"),
            style: Some(ProductStyle {
                layout: Some(ProductLayout::Vertical),
                background_color: s("#f9f9f9"),
                border_radius: s("8px"),
                padding: s("16px"),
                ..Default::default()
            }),
        }),

        BlockType::Social => BlockKind::Social(SocialBlock {
            networks: [
                SocialPlatform::Facebook,
                SocialPlatform::Twitter,
                SocialPlatform::Instagram,
            ]
            .into_iter()
            .map(|platform| SocialNetwork {
                platform,
                url: "#".to_string(),
                icon: None,
            })
            .collect(),
            style: Some(SocialStyle {
                icon_size: s("32px"),
                icon_color: s("#333333"),
                alignment: Some(Alignment::Center),
                spacing: s("16px"),
            }),
        }),

        BlockType::Video => BlockKind::Video(VideoBlock {
            url: String::new(),
            thumbnail: String::new(),
            platform: None,
            style: Some(VideoStyle {
                aspect_ratio: s("16:9"),
                border_radius: s("8px"),
            }),
        }),

        BlockType::Quote => BlockKind::Quote(QuoteBlock {
            content: "Your quote here...".to_string(),
            author: s("Author Name"),
            style: Some(QuoteStyle {
                font_size: s("18px"),
                font_style: s("italic"),
                color: s("#555555"),
                border_left_color: s("#000000"),
                background_color: s("#f5f5f5"),
                padding: s("24px"),
            }),
        }),

        BlockType::Html => BlockKind::Html(HtmlBlock {
            content: "<!-- Custom HTML -->".to_string(),
        }),
    };

    ContentBlock::new(ids.new_id(), kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_default() {
        let mut ids = IDGenerator::from_seed("t");
        for block_type in BlockType::ALL {
            let block = create_block(block_type, &mut ids);
            assert_eq!(block.block_type(), Some(block_type));
        }
    }

    #[test]
    fn test_button_defaults() {
        let mut ids = IDGenerator::from_seed("t");
        let block = create_block(BlockType::Button, &mut ids);
        match block.kind {
            BlockKind::Button(button) => {
                let style = button.style.unwrap();
                assert_eq!(style.background_color.as_deref(), Some("#000000"));
                assert_eq!(style.text_color.as_deref(), Some("#ffffff"));
                assert_eq!(style.border_radius.as_deref(), Some("24px"));
                assert_eq!(button.url, "#");
            }
            other => panic!("Expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_default_to_two_halves() {
        let mut ids = IDGenerator::from_seed("t");
        let block = create_block(BlockType::Columns, &mut ids);
        let columns = block.columns().unwrap();
        assert_eq!(columns.len(), 2);
        assert!(columns.iter().all(|c| c.width.as_deref() == Some("50%")));
    }

    #[test]
    fn test_fresh_ids() {
        let mut ids = IDGenerator::from_seed("t");
        let a = create_block(BlockType::Spacer, &mut ids);
        let b = create_block(BlockType::Spacer, &mut ids);
        assert_ne!(a.id, b.id);
    }
}
