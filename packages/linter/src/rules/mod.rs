mod a11y;
mod empty_image_src;
mod empty_link;
mod no_raw_html;

pub use a11y::{ImageAltRule, LinkTextRule};
pub use empty_image_src::EmptyImageSrcRule;
pub use empty_link::EmptyLinkRule;
pub use no_raw_html::NoRawHtmlRule;

use crate::diagnostic::Diagnostic;
use newsletter_model::ContentBlock;

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one block. Columns are visited by the linter, so rules only
    /// look at the block itself.
    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic>;
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NoRawHtmlRule::new()),
                Box::new(ImageAltRule),
                Box::new(LinkTextRule),
                Box::new(EmptyLinkRule),
                Box::new(EmptyImageSrcRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
