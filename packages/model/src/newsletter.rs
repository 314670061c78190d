//! # Newsletter Input Shape
//!
//! The flat JSON a newsletter extractor produces. Loaded once, never mutated;
//! the block editor works on a converted copy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Newsletter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub metadata: NewsletterMetadata,
    pub content: NewsletterContent,
    pub summary: NewsletterSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterMetadata {
    pub url: String,
    pub extraction_timestamp: String,
    pub brand: String,
    pub title: String,
    pub subtitle: String,
    pub date_sent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Headline,
    #[default]
    Text,
    PreviewText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

impl Section {
    /// Body copy: the description, falling back to raw content
    pub fn body(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    Hero,
    Product,
    #[default]
    General,
    Preview,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterImage {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(rename = "type")]
    pub role: ImageRole,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterLink {
    pub url: String,
    pub text: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub image: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterContent {
    pub sections: Vec<Section>,
    pub images: Vec<NewsletterImage>,
    pub links: Vec<NewsletterLink>,
    pub products: Vec<Product>,
    pub ctas: Vec<Cta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterSummary {
    pub total_images: usize,
    pub total_links: usize,
    pub total_products: usize,
    pub total_ctas: usize,
    pub total_sections: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_method: Option<String>,
}

/// Counts shown in the viewer's analytics panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub images: usize,
    pub links: usize,
    pub products: usize,
    pub ctas: usize,
    pub sections: usize,
}

/// Sender-side settings derived from the newsletter metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailSettings {
    pub subject: String,
    pub preheader: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
}

impl Newsletter {
    /// Parse a newsletter from JSON text
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a newsletter file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let newsletter = Self::from_json(&source)?;
        tracing::debug!(
            path = %path.display(),
            sections = newsletter.content.sections.len(),
            products = newsletter.content.products.len(),
            "loaded newsletter"
        );
        Ok(newsletter)
    }

    pub fn hero_images(&self) -> impl Iterator<Item = &NewsletterImage> {
        self.content
            .images
            .iter()
            .filter(|image| image.role == ImageRole::Hero)
    }

    pub fn analytics(&self) -> Analytics {
        Analytics {
            images: self.content.images.len(),
            links: self.content.links.len(),
            products: self.content.products.len(),
            ctas: self.content.ctas.len(),
            sections: self.content.sections.len(),
        }
    }

    pub fn email_settings(&self) -> EmailSettings {
        let domain: String = self
            .metadata
            .brand
            .to_lowercase()
            .split_whitespace()
            .collect();

        EmailSettings {
            subject: self.metadata.title.clone(),
            preheader: self.metadata.subtitle.clone(),
            from_name: self.metadata.brand.clone(),
            from_email: format!("newsletter@{}.com", domain),
            reply_to: String::new(),
        }
    }
}
