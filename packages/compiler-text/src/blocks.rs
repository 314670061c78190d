use newsletter_model::*;

use crate::markup::strip_markup;

/// How a line should be set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// Heading of level 1..6
    Heading(u8),
    Body,
    /// Image alt text, quote attribution, prices
    Caption,
    /// A call to action with its target
    Link,
    /// Horizontal rule
    Rule,
    /// Vertical gap in CSS pixels
    Space(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub kind: LineKind,
    pub text: String,
}

impl TextLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Flatten a block tree into lines, columns read top to bottom
pub fn compile_blocks(blocks: &[ContentBlock]) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for block in blocks {
        compile_block(block, &mut lines);
    }
    tracing::debug!(blocks = blocks.len(), lines = lines.len(), "compiled text lines");
    lines
}

fn compile_block(block: &ContentBlock, lines: &mut Vec<TextLine>) {
    match &block.kind {
        BlockKind::Text(text) => push_markup(&text.content, LineKind::Body, lines),
        BlockKind::Heading(heading) => {
            let level = heading.clamped_level();
            lines.extend(
                strip_markup(&heading.content)
                    .into_iter()
                    .map(|text| TextLine::new(LineKind::Heading(level), text)),
            );
        }
        BlockKind::Image(image) => {
            if !image.alt.is_empty() {
                lines.push(TextLine::new(LineKind::Caption, format!("[Image: {}]", image.alt)));
            }
        }
        BlockKind::Button(button) => {
            lines.push(TextLine::new(LineKind::Link, link_text(&button.text, &button.url)))
        }
        BlockKind::Divider(_) => lines.push(TextLine::new(LineKind::Rule, "")),
        BlockKind::Spacer(spacer) => {
            lines.push(TextLine::new(LineKind::Space(parse_px(&spacer.height)), ""))
        }
        BlockKind::Columns(columns) => {
            for column in &columns.columns {
                for child in &column.blocks {
                    compile_block(child, lines);
                }
            }
        }
        BlockKind::Product(product) => {
            lines.push(TextLine::new(LineKind::Heading(3), product.name.as_str()));
            if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(TextLine::new(LineKind::Body, description));
            }
            if let Some(price) = product.price.as_deref().filter(|p| !p.is_empty()) {
                lines.push(TextLine::new(LineKind::Caption, price));
            }
            lines.push(TextLine::new(LineKind::Link, link_text("View Product", &product.link)));
        }
        BlockKind::Social(social) => {
            for network in &social.networks {
                lines.push(TextLine::new(
                    LineKind::Link,
                    link_text(network.platform.as_str(), &network.url),
                ));
            }
        }
        BlockKind::Video(video) => {
            lines.push(TextLine::new(LineKind::Link, link_text("Watch video", &video.url)))
        }
        BlockKind::Quote(quote) => {
            lines.push(TextLine::new(
                LineKind::Body,
                format!("\u{201c}{}\u{201d}", quote.content),
            ));
            if let Some(author) = quote.author.as_deref().filter(|a| !a.is_empty()) {
                lines.push(TextLine::new(LineKind::Caption, format!("\u{2014} {}", author)));
            }
        }
        BlockKind::Html(html) => push_markup(&html.content, LineKind::Body, lines),
        BlockKind::Unknown(_) => {}
    }
}

fn push_markup(markup: &str, kind: LineKind, lines: &mut Vec<TextLine>) {
    lines.extend(
        strip_markup(markup)
            .into_iter()
            .map(|text| TextLine::new(kind, text)),
    );
}

fn link_text(text: &str, url: &str) -> String {
    if url.is_empty() || url == "#" {
        text.to_string()
    } else {
        format!("{} ({})", text, url)
    }
}

/// Leading number of a CSS length, 0 when there is none
fn parse_px(value: &str) -> f32 {
    let number: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.parse().unwrap_or(0.0)
}

/// Plain text for printed lines; rules become dashes, spaces a blank line
pub fn render_lines(lines: &[TextLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line.kind {
            LineKind::Rule => out.push_str("----------------------------------------"),
            LineKind::Space(_) => {}
            LineKind::Heading(1) => out.push_str(&line.text.to_uppercase()),
            _ => out.push_str(&line.text),
        }
        out.push('\n');
    }
    out
}
