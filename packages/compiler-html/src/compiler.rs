use newsletter_evaluator::{escape_html, is_void, open_tag_attributes, Evaluator, Styles, VNode};
use newsletter_model::{BlockId, ContentBlock, EmailSettings, Theme};
use thiserror::Error;

use crate::context::{CompileOptions, Context};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Block {0} has no static HTML form")]
    UnsupportedBlock(BlockId),

    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),
}

/// Compile a block list into a standalone email document
pub fn compile_to_html(
    blocks: &[ContentBlock],
    theme: &Theme,
    settings: &EmailSettings,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let nodes = Evaluator::export(theme).evaluate(blocks);
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(document_title(settings), theme, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"container\">");
    ctx.indent();

    for node in &nodes {
        compile_node(node, &mut ctx)?;
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    let html = ctx.get_output();
    tracing::debug!(blocks = blocks.len(), bytes = html.len(), "compiled html document");
    Ok(html)
}

/// Serialize already evaluated nodes without a document shell
pub fn compile_fragment(nodes: &[VNode], options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    for node in nodes {
        compile_node(node, &mut ctx)?;
    }
    Ok(ctx.get_output())
}

fn document_title(settings: &EmailSettings) -> &str {
    if settings.subject.trim().is_empty() {
        "Newsletter"
    } else {
        &settings.subject
    }
}

fn compile_head(title: &str, theme: &Theme, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"utf-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line(&format!(
        "body {{ font-family: {}; margin: 0; padding: 0; background: {}; color: {}; }}",
        theme.fonts.body, theme.colors.background, theme.colors.text
    ));
    ctx.add_line(".container { max-width: 600px; margin: 0 auto; background: white; }");
    ctx.add_line(&format!(
        "h1, h2, h3, h4, h5, h6 {{ font-family: {}; }}",
        theme.fonts.heading
    ));
    ctx.add_line(&format!("a {{ color: {}; }}", theme.colors.accent));
    ctx.add_line(&format!(
        ".button {{ background: {}; color: white; }}",
        theme.colors.primary
    ));
    ctx.add_line("@media (max-width: 600px) { .stack-on-mobile { flex-direction: column; } }");
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

pub(crate) fn compile_node(node: &VNode, ctx: &mut Context) -> Result<(), CompileError> {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => compile_element(tag, attributes, styles, children, ctx),

        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
            Ok(())
        }

        VNode::Raw { html } => {
            ctx.add_line(html);
            Ok(())
        }

        VNode::Placeholder { block_id, .. } => {
            Err(CompileError::UnsupportedBlock(block_id.clone()))
        }
    }
}

fn compile_element(
    tag: &str,
    attributes: &[(String, String)],
    styles: &Styles,
    children: &[VNode],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    let open = format!("<{}{}>", tag, open_tag_attributes(attributes, styles));

    if is_void(tag) {
        ctx.add_line(&open);
        return Ok(());
    }

    // Text-only content stays on the opening tag's line
    if !has_element_children(children) {
        let mut line = open;
        for child in children {
            match child {
                VNode::Text { content } => line.push_str(&escape_html(content)),
                VNode::Raw { html } => line.push_str(html),
                _ => {}
            }
        }
        line.push_str(&format!("</{}>", tag));
        ctx.add_line(&line);
        return Ok(());
    }

    ctx.add_line(&open);
    ctx.indent();
    for child in children {
        compile_node(child, ctx)?;
    }
    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));

    Ok(())
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. } | VNode::Raw { .. }))
}
