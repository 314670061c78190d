use chrono::{DateTime, Utc};
use newsletter_common::{CommonError, KeyValueStore};
use newsletter_model::{Newsletter, NewsletterTemplate, TemplateCategory};

use crate::error::TemplateError;

/// Storage key holding the template list
pub const TEMPLATES_KEY: &str = "newsletter-templates";

pub struct TemplateStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TemplateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// All templates in save order
    pub fn list(&self) -> Result<Vec<NewsletterTemplate>, TemplateError> {
        match self.store.get(TEMPLATES_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(TemplateError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: &str) -> Result<NewsletterTemplate, TemplateError> {
        self.list()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    pub fn save(
        &mut self,
        name: &str,
        description: &str,
        category: TemplateCategory,
        newsletter: &Newsletter,
    ) -> Result<NewsletterTemplate, TemplateError> {
        self.save_at(name, description, category, newsletter, Utc::now())
    }

    /// [`Self::save`] with an explicit clock reading. The id is the
    /// millisecond timestamp, moved forward while it collides.
    pub fn save_at(
        &mut self,
        name: &str,
        description: &str,
        category: TemplateCategory,
        newsletter: &Newsletter,
        now: DateTime<Utc>,
    ) -> Result<NewsletterTemplate, TemplateError> {
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }

        let mut templates = self.list()?;
        let mut millis = now.timestamp_millis();
        while templates.iter().any(|t| t.id == millis.to_string()) {
            millis += 1;
        }

        let template = NewsletterTemplate {
            id: millis.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            thumbnail: None,
            newsletter: newsletter.clone(),
            category,
            created_at: now,
            updated_at: now,
        };
        templates.push(template.clone());
        self.write(&templates)?;

        tracing::info!(id = %template.id, name = %template.name, "saved template");
        Ok(template)
    }

    /// Remove a template, returning it
    pub fn delete(&mut self, id: &str) -> Result<NewsletterTemplate, TemplateError> {
        let mut templates = self.list()?;
        let index = templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;
        let removed = templates.remove(index);
        self.write(&templates)?;

        tracing::info!(id, "deleted template");
        Ok(removed)
    }

    /// Case-insensitive search over name and description. `None` matches
    /// every category.
    pub fn search(
        &self,
        query: &str,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<NewsletterTemplate>, TemplateError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|t| t.matches(query))
            .filter(|t| category.map_or(true, |c| t.category == c))
            .collect())
    }

    fn write(&mut self, templates: &[NewsletterTemplate]) -> Result<(), TemplateError> {
        let json = serde_json::to_string(templates).map_err(CommonError::from)?;
        self.store.set(TEMPLATES_KEY, &json)?;
        Ok(())
    }
}
