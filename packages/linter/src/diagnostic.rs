use newsletter_model::BlockId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Info => "info",
        };
        f.write_str(label)
    }
}

/// A diagnostic message from the linter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Block the issue was found on
    pub block_id: BlockId,

    /// Optional suggestion for fixing the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn new(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        block_id: impl Into<BlockId>,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            block_id: block_id.into(),
            suggestion: None,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>, block_id: impl Into<BlockId>) -> Self {
        Self::new(DiagnosticLevel::Error, rule, message, block_id)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, block_id: impl Into<BlockId>) -> Self {
        Self::new(DiagnosticLevel::Warning, rule, message, block_id)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>, block_id: impl Into<BlockId>) -> Self {
        Self::new(DiagnosticLevel::Info, rule, message, block_id)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: {}", self.level, self.rule, self.block_id, self.message)
    }
}
