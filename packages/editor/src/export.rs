//! Export payloads and file naming

use chrono::Utc;
use newsletter_model::{ContentBlock, EmailSettings, Theme};
use serde::{Deserialize, Serialize};

/// The editor's saved state: `{ metadata, blocks, theme }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemixExport {
    pub metadata: EmailSettings,
    pub blocks: Vec<ContentBlock>,
    pub theme: Theme,
}

impl RemixExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    NewsletterJson,
    RemixJson,
    Html,
    Pdf,
}

impl ExportKind {
    fn prefix(&self) -> &'static str {
        match self {
            ExportKind::RemixJson => "newsletter-remix",
            _ => "newsletter",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::NewsletterJson | ExportKind::RemixJson => "json",
            ExportKind::Html => "html",
            ExportKind::Pdf => "pdf",
        }
    }

    /// `newsletter-<ms>.json`, `newsletter-remix-<ms>.json`, ...
    pub fn file_name(&self, timestamp_ms: i64) -> String {
        format!("{}-{}.{}", self.prefix(), timestamp_ms, self.extension())
    }

    pub fn file_name_now(&self) -> String {
        self.file_name(unix_millis())
    }
}

pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}
