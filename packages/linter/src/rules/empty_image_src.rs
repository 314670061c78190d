use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use newsletter_model::{BlockKind, ContentBlock};

pub struct EmptyImageSrcRule;

impl LintRule for EmptyImageSrcRule {
    fn name(&self) -> &'static str {
        "empty-image-src"
    }

    fn description(&self) -> &'static str {
        "Report image and product blocks without an image source"
    }

    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic> {
        let missing = match &block.kind {
            BlockKind::Image(image) => image.src.trim().is_empty(),
            BlockKind::Product(product) => product.image.trim().is_empty(),
            _ => false,
        };

        if missing {
            vec![Diagnostic::warning(
                self.name(),
                format!("{} block has no image source", block.kind.type_name()),
                block.id.as_str(),
            )]
        } else {
            Vec::new()
        }
    }
}
