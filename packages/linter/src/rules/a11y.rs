use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use newsletter_model::{BlockKind, ContentBlock};

/// Images need alternative text for screen readers
pub struct ImageAltRule;

impl LintRule for ImageAltRule {
    fn name(&self) -> &'static str {
        "a11y-img-alt"
    }

    fn description(&self) -> &'static str {
        "Require alt text on image blocks"
    }

    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic> {
        match &block.kind {
            BlockKind::Image(image) if image.alt.trim().is_empty() => vec![Diagnostic::error(
                self.name(),
                "Images must have alternative text for screen readers",
                block.id.as_str(),
            )
            .with_suggestion("Set 'alt' to a short description of the image content")],
            _ => Vec::new(),
        }
    }
}

/// Buttons are links and need visible text
pub struct LinkTextRule;

impl LintRule for LinkTextRule {
    fn name(&self) -> &'static str {
        "a11y-link-text"
    }

    fn description(&self) -> &'static str {
        "Require text on button blocks"
    }

    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic> {
        match &block.kind {
            BlockKind::Button(button) if button.text.trim().is_empty() => vec![Diagnostic::error(
                self.name(),
                "Buttons must have accessible text content",
                block.id.as_str(),
            )
            .with_suggestion("Give the button a label that says where it leads")],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(json: serde_json::Value) -> ContentBlock {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_img_without_alt() {
        let diagnostics = ImageAltRule.check_block(&block(serde_json::json!(
            { "id": "i", "type": "image", "src": "a.png", "alt": "  " }
        )));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "a11y-img-alt");
        assert!(diagnostics[0].suggestion.is_some());
    }

    #[test]
    fn test_img_with_alt() {
        let diagnostics = ImageAltRule.check_block(&block(serde_json::json!(
            { "id": "i", "type": "image", "src": "a.png", "alt": "Description" }
        )));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_button_without_text() {
        let diagnostics = LinkTextRule.check_block(&block(serde_json::json!(
            { "id": "b", "type": "button", "text": "", "url": "https://a.example" }
        )));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].block_id, "b");
    }

    #[test]
    fn test_other_blocks_are_ignored() {
        let text = block(serde_json::json!({ "id": "t", "type": "text", "content": "" }));
        assert!(ImageAltRule.check_block(&text).is_empty());
        assert!(LinkTextRule.check_block(&text).is_empty());
    }
}
