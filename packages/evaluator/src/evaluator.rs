use newsletter_model::*;

use crate::styles::StyleResolver;
use crate::vdom::{EditBinding, VNode};

/// Which renderer the tree is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Editable preview: bindings attached, unknown blocks shown as placeholders
    Preview,
    /// Static export: no bindings, unknown blocks dropped
    Export,
}

/// Evaluates blocks into a virtual DOM
pub struct Evaluator<'a> {
    styles: StyleResolver<'a>,
    mode: RenderMode,
}

impl<'a> Evaluator<'a> {
    pub fn new(theme: &'a Theme, mode: RenderMode) -> Self {
        Self {
            styles: StyleResolver::new(theme),
            mode,
        }
    }

    pub fn preview(theme: &'a Theme) -> Self {
        Self::new(theme, RenderMode::Preview)
    }

    pub fn export(theme: &'a Theme) -> Self {
        Self::new(theme, RenderMode::Export)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Evaluate a block list, in order
    pub fn evaluate(&self, blocks: &[ContentBlock]) -> Vec<VNode> {
        blocks.iter().filter_map(|b| self.evaluate_block(b)).collect()
    }

    /// `None` when the block renders to nothing
    pub fn evaluate_block(&self, block: &ContentBlock) -> Option<VNode> {
        let node = match &block.kind {
            BlockKind::Text(text) => self.eval_text(block, text),
            BlockKind::Heading(heading) => self.eval_heading(block, heading),
            BlockKind::Image(image) => self.eval_image(block, image),
            BlockKind::Button(button) => self.eval_button(block, button),
            BlockKind::Divider(divider) => self.eval_divider(divider),
            BlockKind::Spacer(spacer) => self.eval_spacer(spacer),
            BlockKind::Columns(columns) => self.eval_columns(columns),
            BlockKind::Product(product) => self.eval_product(block, product),
            BlockKind::Social(social) => self.eval_social(social),
            BlockKind::Video(video) => self.eval_video(video),
            BlockKind::Quote(quote) => self.eval_quote(block, quote),
            BlockKind::Html(html) => self.eval_html(block, html),
            BlockKind::Unknown(raw) => {
                tracing::warn!(
                    block_id = %block.id,
                    block_type = raw.type_tag(),
                    "skipping block of unknown type"
                );
                return match self.mode {
                    RenderMode::Preview => Some(VNode::Placeholder {
                        block_id: block.id.clone(),
                        message: "Unsupported block".to_string(),
                    }),
                    RenderMode::Export => None,
                };
            }
        };
        Some(node.with_block_id(block.id.as_str()))
    }

    fn bind(&self, block: &ContentBlock, field: &str) -> Option<EditBinding> {
        match self.mode {
            RenderMode::Preview => Some(EditBinding::new(block.id.as_str(), field)),
            RenderMode::Export => None,
        }
    }

    fn eval_text(&self, block: &ContentBlock, text: &TextBlock) -> VNode {
        VNode::element("div")
            .with_styles(self.styles.text(text.style.as_ref()))
            .with_binding(self.bind(block, "content"))
            .with_child(VNode::raw(text.content.as_str()))
    }

    fn eval_heading(&self, block: &ContentBlock, heading: &HeadingBlock) -> VNode {
        VNode::element(format!("h{}", heading.clamped_level()))
            .with_styles(self.styles.heading(heading.style.as_ref()))
            .with_binding(self.bind(block, "content"))
            .with_child(VNode::text(heading.content.as_str()))
    }

    fn eval_image(&self, block: &ContentBlock, image: &ImageBlock) -> VNode {
        let style = image.style.as_ref();
        let img = VNode::element("img")
            .with_attr("src", image.src.as_str())
            .with_attr("alt", image.alt.as_str())
            .with_styles(self.styles.image(style))
            .with_binding(self.bind(block, "alt"));

        let inner = match &image.link {
            Some(link) => VNode::element("a").with_attr("href", link.as_str()).with_child(img),
            None => img,
        };

        VNode::element("div")
            .with_styles(self.styles.image_wrapper(style))
            .with_child(inner)
    }

    fn eval_button(&self, block: &ContentBlock, button: &ButtonBlock) -> VNode {
        let style = button.style.as_ref();
        VNode::element("div")
            .with_styles(self.styles.button_wrapper(style))
            .with_child(
                VNode::element("a")
                    .with_attr("href", button.url.as_str())
                    .with_attr("class", "button")
                    .with_styles(self.styles.button(style))
                    .with_binding(self.bind(block, "text"))
                    .with_child(VNode::text(button.text.as_str())),
            )
    }

    fn eval_divider(&self, divider: &DividerBlock) -> VNode {
        let style = divider.style.as_ref();
        VNode::element("div")
            .with_styles(self.styles.divider_wrapper(style))
            .with_child(VNode::element("hr").with_styles(self.styles.divider(style)))
    }

    fn eval_spacer(&self, spacer: &SpacerBlock) -> VNode {
        VNode::element("div")
            .with_styles(self.styles.spacer(spacer))
            .with_child(VNode::raw("&nbsp;"))
    }

    fn eval_columns(&self, columns: &ColumnsBlock) -> VNode {
        let count = columns.columns.len();
        let children = columns
            .columns
            .iter()
            .map(|column| {
                VNode::element("div")
                    .with_attr("class", "column")
                    .with_styles(self.styles.column(column, count))
                    .with_children(self.evaluate(&column.blocks))
            })
            .collect();

        let stack = columns
            .style
            .as_ref()
            .and_then(|s| s.stack_on_mobile)
            .unwrap_or(false);
        let class = if stack { "columns stack-on-mobile" } else { "columns" };

        VNode::element("div")
            .with_attr("class", class)
            .with_styles(self.styles.columns(columns.style.as_ref()))
            .with_children(children)
    }

    fn eval_product(&self, block: &ContentBlock, product: &ProductBlock) -> VNode {
        let mut details = vec![VNode::element("h3")
            .with_styles(self.styles.product_name())
            .with_binding(self.bind(block, "name"))
            .with_child(VNode::text(product.name.as_str()))];

        if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
            details.push(
                VNode::element("p")
                    .with_styles(self.styles.product_description())
                    .with_binding(self.bind(block, "description"))
                    .with_child(VNode::text(description)),
            );
        }
        if let Some(price) = product.price.as_deref().filter(|p| !p.is_empty()) {
            details.push(
                VNode::element("p")
                    .with_styles(self.styles.product_price())
                    .with_binding(self.bind(block, "price"))
                    .with_child(VNode::text(price)),
            );
        }
        details.push(
            VNode::element("a")
                .with_attr("href", product.link.as_str())
                .with_styles(self.styles.product_link())
                .with_child(VNode::text("View Product")),
        );

        let mut children = Vec::new();
        if !product.image.is_empty() {
            children.push(
                VNode::element("div").with_child(
                    VNode::element("img")
                        .with_attr("src", product.image.as_str())
                        .with_attr("alt", product.name.as_str())
                        .with_styles(self.styles.product_image()),
                ),
            );
        }
        children.push(VNode::element("div").with_children(details));

        VNode::element("div")
            .with_attr("class", "product")
            .with_styles(self.styles.product(product.style.as_ref()))
            .with_children(children)
    }

    fn eval_social(&self, social: &SocialBlock) -> VNode {
        let style = social.style.as_ref();
        let icons = social
            .networks
            .iter()
            .map(|network| {
                VNode::element("a")
                    .with_attr("href", network.url.as_str())
                    .with_attr("title", network.platform.as_str())
                    .with_styles(self.styles.social_icon(style))
                    .with_child(VNode::text(network.platform.initial()))
            })
            .collect();

        VNode::element("div")
            .with_styles(self.styles.social(style))
            .with_children(icons)
    }

    fn eval_video(&self, video: &VideoBlock) -> VNode {
        let play = VNode::element("span")
            .with_styles(self.styles.video_play())
            .with_child(VNode::raw("&#9654;"));

        let mut link = VNode::element("a").with_attr("href", video.url.as_str());
        if !video.thumbnail.is_empty() {
            link = link.with_child(
                VNode::element("img")
                    .with_attr("src", video.thumbnail.as_str())
                    .with_attr("alt", "Video")
                    .with_styles(self.styles.video_thumbnail()),
            );
        }

        VNode::element("div")
            .with_styles(self.styles.video(video.style.as_ref()))
            .with_child(link.with_child(play))
    }

    fn eval_quote(&self, block: &ContentBlock, quote: &QuoteBlock) -> VNode {
        let mut node = VNode::element("blockquote")
            .with_styles(self.styles.quote(quote.style.as_ref()))
            .with_child(
                VNode::element("p")
                    .with_styles(self.styles.quote_text())
                    .with_binding(self.bind(block, "content"))
                    .with_child(VNode::text(quote.content.as_str())),
            );

        if let Some(author) = quote.author.as_deref().filter(|a| !a.is_empty()) {
            node = node.with_child(
                VNode::element("footer")
                    .with_styles(self.styles.quote_author())
                    .with_binding(self.bind(block, "author"))
                    .with_child(VNode::text(format!("\u{2014} {}", author))),
            );
        }
        node
    }

    fn eval_html(&self, block: &ContentBlock, html: &HtmlBlock) -> VNode {
        VNode::element("div")
            .with_styles(self.styles.html())
            .with_binding(self.bind(block, "content"))
            .with_child(VNode::raw(html.content.as_str()))
    }
}
