use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type. Every external-service wrapper maps its
/// failures into one of these variants; `main` renders them at exit.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search error: {0}")]
    Search(String),

    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("No careers-page candidate found for {0}")]
    NoCandidates(String),

    #[error("Could not determine official website for {0}")]
    NoOfficialSite(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e.to_string())
    }
}
