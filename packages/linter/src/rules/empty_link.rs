use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use newsletter_model::{BlockKind, ContentBlock};

/// Flags links that still point at a placeholder
pub struct EmptyLinkRule;

fn is_placeholder(url: &str) -> bool {
    let url = url.trim();
    url.is_empty() || url == "#"
}

impl LintRule for EmptyLinkRule {
    fn name(&self) -> &'static str {
        "empty-link"
    }

    fn description(&self) -> &'static str {
        "Report buttons, products and linked images whose target is empty or '#'"
    }

    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic> {
        let (what, url) = match &block.kind {
            BlockKind::Button(button) => ("Button", button.url.as_str()),
            BlockKind::Product(product) => ("Product", product.link.as_str()),
            BlockKind::Image(image) => match &image.link {
                Some(link) => ("Image", link.as_str()),
                None => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        if !is_placeholder(url) {
            return Vec::new();
        }
        vec![Diagnostic::info(
            self.name(),
            format!("{} link is empty or '#'", what),
            block.id.as_str(),
        )
        .with_suggestion("Point the link at a real page before sending")]
    }
}
