//! Read-only rendering of a [`Newsletter`] as received, before any conversion
//! to blocks.

use std::str::FromStr;

use chrono::Datelike;
use newsletter_evaluator::{escape_html, Styles, VNode};
use newsletter_model::{Newsletter, Product, Section};

use crate::compiler::{compile_node, CompileError};
use crate::context::{CompileOptions, Context};

/// Device width the viewer frames the email at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn max_width(&self) -> &'static str {
        match self {
            Viewport::Desktop => "600px",
            Viewport::Mobile => "375px",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

impl FromStr for Viewport {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Viewport::Desktop),
            "mobile" => Ok(Viewport::Mobile),
            other => Err(CompileError::UnknownViewMode(other.to_string())),
        }
    }
}

pub struct NewsletterView<'a> {
    newsletter: &'a Newsletter,
    viewport: Viewport,
    year: i32,
}

impl<'a> NewsletterView<'a> {
    pub fn new(newsletter: &'a Newsletter, viewport: Viewport) -> Self {
        Self {
            newsletter,
            viewport,
            year: chrono::Utc::now().year(),
        }
    }

    /// Copyright year shown in the footer
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Email frame: header, hero images, sections, product grid, footer
    pub fn frame(&self) -> VNode {
        let mut body = vec![self.hero()];
        body.extend(self.newsletter.content.sections.iter().map(section));
        if let Some(grid) = product_grid(&self.newsletter.content.products) {
            body.push(grid);
        }
        body.push(self.footer());

        VNode::element("div")
            .with_attr("class", format!("viewer viewer-{}", self.viewport.as_str()))
            .with_styles(
                Styles::new()
                    .set("max-width", self.viewport.max_width())
                    .set("margin", "0 auto")
                    .set("background-color", "#ffffff"),
            )
            .with_child(self.header())
            .with_child(VNode::element("div").with_children(body))
    }

    /// Full HTML page around [`Self::frame`]
    pub fn render(&self, options: CompileOptions) -> Result<String, CompileError> {
        let metadata = &self.newsletter.metadata;
        let title = if metadata.brand.is_empty() {
            "Newsletter".to_string()
        } else {
            format!("{} Newsletter", metadata.brand)
        };

        let mut ctx = Context::new(options);
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();
        ctx.add_line("<head>");
        ctx.indent();
        ctx.add_line("<meta charset=\"utf-8\">");
        ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
        ctx.add_line(&format!("<title>{}</title>", escape_html(&title)));
        ctx.dedent();
        ctx.add_line("</head>");
        ctx.add_line("<body style=\"margin: 0; background-color: #f3f4f6\">");
        ctx.indent();
        compile_node(&self.frame(), &mut ctx)?;
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");

        tracing::debug!(viewport = self.viewport.as_str(), "rendered newsletter view");
        Ok(ctx.get_output())
    }

    fn header(&self) -> VNode {
        let metadata = &self.newsletter.metadata;
        let line = |text: String| {
            VNode::element("div")
                .with_styles(Styles::new().set("font-size", "12px").set("color", "#6b7280"))
                .with_child(VNode::text(text))
        };

        VNode::element("div")
            .with_styles(
                Styles::new()
                    .set("border-bottom", "1px solid #e5e7eb")
                    .set("padding", "16px"),
            )
            .with_child(line(format!("From: {}", metadata.brand)))
            .with_child(line(format!("Subject: {}", metadata.title)))
    }

    fn hero(&self) -> VNode {
        let images = self.newsletter.hero_images().map(|image| {
            let alt = if image.alt.is_empty() {
                "Hero image"
            } else {
                image.alt.as_str()
            };
            VNode::element("div").with_child(
                VNode::element("img")
                    .with_attr("src", image.url.as_str())
                    .with_attr("alt", alt)
                    .with_styles(
                        Styles::new()
                            .set("width", "100%")
                            .set("height", "auto")
                            .set("display", "block"),
                    ),
            )
        });
        VNode::element("div").with_children(images.collect())
    }

    fn footer(&self) -> VNode {
        let brand = &self.newsletter.metadata.brand;
        let link = |text: &str| {
            VNode::element("a")
                .with_attr("href", "#")
                .with_styles(Styles::new().set("color", "#6b7280").set("margin", "0 8px"))
                .with_child(VNode::text(text))
        };

        VNode::element("div")
            .with_styles(
                Styles::new()
                    .set("padding", "32px 24px")
                    .set("background-color", "#f9fafb")
                    .set("text-align", "center")
                    .set("font-size", "12px")
                    .set("color", "#6b7280"),
            )
            .with_child(
                VNode::element("p").with_child(VNode::text(format!("\u{a9} {} {}", self.year, brand))),
            )
            .with_child(
                VNode::element("div")
                    .with_child(link("Privacy Policy"))
                    .with_child(link("Unsubscribe")),
            )
    }
}

fn section(section: &Section) -> VNode {
    let mut node = VNode::element("div")
        .with_styles(Styles::new().set("padding", "32px 24px"))
        .with_child(
            VNode::element("h2")
                .with_styles(
                    Styles::new()
                        .set("font-size", "24px")
                        .set("font-weight", "600")
                        .set("color", "#111827")
                        .set("margin", "0 0 16px 0"),
                )
                .with_child(VNode::text(section.title.as_str())),
        );

    if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
        node = node.with_child(
            VNode::element("p")
                .with_styles(Styles::new().set("color", "#4b5563").set("margin", "0 0 24px 0"))
                .with_child(VNode::text(description)),
        );
    }

    if let Some(cta) = &section.cta {
        node = node.with_child(
            VNode::element("a")
                .with_attr("href", cta.url.as_str())
                .with_styles(
                    Styles::new()
                        .set("display", "inline-block")
                        .set("background-color", "#000000")
                        .set("color", "#ffffff")
                        .set("padding", "12px 24px")
                        .set("border-radius", "9999px")
                        .set("font-size", "14px")
                        .set("font-weight", "500")
                        .set("text-decoration", "none"),
                )
                .with_child(VNode::text(cta.text.as_str())),
        );
    }
    node
}

fn product_grid(products: &[Product]) -> Option<VNode> {
    if products.is_empty() {
        return None;
    }

    let cells = products
        .iter()
        .map(|product| {
            VNode::element("div")
                .with_styles(Styles::new().set("text-align", "center"))
                .with_child(
                    VNode::element("img")
                        .with_attr("src", product.image.as_str())
                        .with_attr("alt", product.name.as_str())
                        .with_styles(
                            Styles::new()
                                .set("width", "100%")
                                .set("height", "auto")
                                .set("margin-bottom", "8px"),
                        ),
                )
                .with_child(
                    VNode::element("p")
                        .with_styles(
                            Styles::new()
                                .set("font-size", "14px")
                                .set("font-weight", "500")
                                .set("color", "#374151"),
                        )
                        .with_child(VNode::text(product.name.as_str())),
                )
        })
        .collect();

    Some(
        VNode::element("div")
            .with_styles(Styles::new().set("padding", "32px 24px"))
            .with_child(
                VNode::element("div")
                    .with_attr("class", "product-grid")
                    .with_styles(
                        Styles::new()
                            .set("display", "grid")
                            .set("grid-template-columns", "repeat(2, 1fr)")
                            .set("gap", "16px"),
                    )
                    .with_children(cells),
            ),
    )
}
