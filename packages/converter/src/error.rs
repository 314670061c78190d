use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Unknown layout preset: {0} (expected standard, brand or stacked)")]
    UnknownLayout(String),
}
