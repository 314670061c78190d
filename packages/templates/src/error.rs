use newsletter_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Please enter a template name")]
    EmptyName,

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Stored templates are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] CommonError),
}
