use newsletter_model::*;

use crate::layout::{LayoutPreset, ProductArrangement};

/// Stateful builder that hands out ids while blocks are appended
struct BlockSink<'a> {
    ids: &'a mut IDGenerator,
    blocks: Vec<ContentBlock>,
}

impl<'a> BlockSink<'a> {
    fn new(ids: &'a mut IDGenerator) -> Self {
        Self {
            ids,
            blocks: Vec::new(),
        }
    }

    fn make(&mut self, kind: BlockKind) -> ContentBlock {
        ContentBlock::new(self.ids.new_id(), kind)
    }

    fn push(&mut self, kind: BlockKind) {
        let block = self.make(kind);
        self.blocks.push(block);
    }

    fn spacer(&mut self, height: &str) {
        self.push(BlockKind::Spacer(SpacerBlock {
            height: height.to_string(),
        }));
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        renumber(&mut self.blocks);
        self.blocks
    }
}

/// Convert a newsletter into editor blocks.
///
/// Output order: hero images (plus a spacer), then each section as
/// heading / text / button with spacers between sections, then a divider,
/// a products heading and the product rows. Optional pieces that are absent
/// produce no block. The result depends only on the inputs and the ids drawn
/// from `ids`.
pub fn convert(
    newsletter: &Newsletter,
    preset: &LayoutPreset,
    ids: &mut IDGenerator,
) -> Vec<ContentBlock> {
    let mut sink = BlockSink::new(ids);

    let mut heroes = 0;
    for image in newsletter.hero_images() {
        heroes += 1;
        sink.push(BlockKind::Image(ImageBlock {
            src: image.url.clone(),
            alt: image.alt.clone(),
            link: None,
            style: Some(preset.hero_style.clone()),
        }));
    }
    if heroes > 0 {
        sink.spacer(&preset.hero_spacer);
    }

    let sections = &newsletter.content.sections;
    for (index, section) in sections.iter().enumerate() {
        convert_section(&mut sink, section, preset);
        if index + 1 < sections.len() {
            sink.spacer(&preset.section_spacer);
        }
    }

    let products = &newsletter.content.products;
    if !products.is_empty() {
        sink.push(BlockKind::Divider(DividerBlock {
            style: Some(preset.divider_style.clone()),
        }));
        sink.push(BlockKind::Heading(HeadingBlock {
            content: preset.products_heading.clone(),
            level: 2,
            style: Some(preset.products_heading_style.clone()),
        }));

        match preset.products {
            ProductArrangement::Stacked => {
                for product in products {
                    sink.push(product_kind(product, preset));
                }
            }
            ProductArrangement::Grid => {
                for pair in products.chunks(2) {
                    let columns = pair
                        .iter()
                        .map(|product| {
                            let block = sink.make(product_kind(product, preset));
                            Column {
                                blocks: vec![block],
                                width: Some("50%".to_string()),
                            }
                        })
                        .collect();
                    sink.push(BlockKind::Columns(ColumnsBlock {
                        columns,
                        style: Some(preset.columns_style.clone()),
                    }));
                }
            }
        }
    }

    let blocks = sink.finish();
    tracing::debug!(
        layout = %preset.name,
        blocks = blocks.len(),
        heroes,
        sections = sections.len(),
        products = products.len(),
        "converted newsletter"
    );
    blocks
}

fn convert_section(sink: &mut BlockSink<'_>, section: &Section, preset: &LayoutPreset) {
    sink.push(BlockKind::Heading(HeadingBlock {
        content: section.title.clone(),
        level: 2,
        style: Some(preset.heading_style.clone()),
    }));

    if let Some(body) = section.body() {
        sink.push(BlockKind::Text(TextBlock {
            content: format!("<p>{}</p>", body),
            style: Some(preset.text_style.clone()),
        }));
    }

    if let Some(cta) = &section.cta {
        sink.push(BlockKind::Button(ButtonBlock {
            text: cta.text.clone(),
            url: cta.url.clone(),
            style: Some(preset.button_style.clone()),
        }));
    }
}

fn product_kind(product: &Product, preset: &LayoutPreset) -> BlockKind {
    let link = if product.link.is_empty() {
        "#".to_string()
    } else {
        product.link.clone()
    };

    BlockKind::Product(ProductBlock {
        name: product.name.clone(),
        image: product.image.clone(),
        link,
        description: product.description.clone(),
        price: None,
        style: Some(preset.product_style.clone()),
    })
}
