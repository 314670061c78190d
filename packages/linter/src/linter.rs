use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use newsletter_model::visitor::{walk_block, walk_blocks};
use newsletter_model::{ContentBlock, Visitor};

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a block tree, columns included, and return diagnostics in
/// document order
pub fn lint_blocks(blocks: &[ContentBlock], options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut linter = BlockLinter {
        registry: &registry,
        diagnostics: Vec::new(),
    };
    walk_blocks(&mut linter, blocks);
    linter.diagnostics
}

struct BlockLinter<'r> {
    registry: &'r RuleRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl Visitor for BlockLinter<'_> {
    fn visit_block(&mut self, block: &ContentBlock) {
        for rule in self.registry.rules() {
            self.diagnostics.extend(rule.check_block(block));
        }
        walk_block(self, block);
    }
}
