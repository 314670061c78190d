use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use newsletter_model::{BlockKind, ContentBlock};
use regex::Regex;

/// HTML blocks go into the email unsanitized. Scripts and inline event
/// handlers are errors; anything else is a reminder.
pub struct NoRawHtmlRule {
    script: Regex,
    handler: Regex,
}

impl NoRawHtmlRule {
    pub fn new() -> Self {
        Self {
            script: Regex::new(r"(?i)<script\b").unwrap(),
            handler: Regex::new(r#"(?i)\son[a-z]+\s*="#).unwrap(),
        }
    }
}

impl Default for NoRawHtmlRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LintRule for NoRawHtmlRule {
    fn name(&self) -> &'static str {
        "no-raw-html"
    }

    fn description(&self) -> &'static str {
        "Flag HTML blocks, which are inserted without sanitizing"
    }

    fn check_block(&self, block: &ContentBlock) -> Vec<Diagnostic> {
        let BlockKind::Html(html) = &block.kind else {
            return Vec::new();
        };

        let diagnostic = if self.script.is_match(&html.content) {
            Diagnostic::error(self.name(), "HTML block contains a <script> tag", block.id.as_str())
                .with_suggestion("Remove the script; email clients strip or block it")
        } else if let Some(found) = self.handler.find(&html.content) {
            Diagnostic::error(
                self.name(),
                format!(
                    "HTML block contains an inline event handler '{}'",
                    found.as_str().trim().trim_end_matches('=').trim()
                ),
                block.id.as_str(),
            )
            .with_suggestion("Remove inline event handlers from the markup")
        } else {
            Diagnostic::warning(
                self.name(),
                "HTML block content is inserted without sanitizing",
                block.id.as_str(),
            )
            .with_suggestion("Prefer text or button blocks where possible")
        };
        vec![diagnostic]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticLevel;

    fn check(content: &str) -> Diagnostic {
        let block: ContentBlock = serde_json::from_value(serde_json::json!(
            { "id": "r", "type": "html", "content": content }
        ))
        .unwrap();
        let mut diagnostics = NoRawHtmlRule::new().check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        diagnostics.remove(0)
    }

    #[test]
    fn test_plain_markup_is_a_warning() {
        assert_eq!(check("<table></table>").level, DiagnosticLevel::Warning);
    }

    #[test]
    fn test_script_is_an_error() {
        let diagnostic = check("<SCRIPT src=x></SCRIPT>");
        assert_eq!(diagnostic.level, DiagnosticLevel::Error);
        assert!(diagnostic.message.contains("<script>"));
    }

    #[test]
    fn test_inline_handler_is_an_error() {
        let diagnostic = check("<img src=x onError = \"steal()\">");
        assert_eq!(diagnostic.level, DiagnosticLevel::Error);
        assert!(diagnostic.message.contains("'onError'"));
    }

    #[test]
    fn test_words_starting_with_on_are_fine() {
        assert_eq!(check("<p class=\"online\">one=1</p>").level, DiagnosticLevel::Warning);
    }
}
