use serde::{Deserialize, Serialize};

/// Final answer of a career-page lookup. Created once per run after the
/// winning candidate is judged; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPageResult {
    pub url: String,
    /// Always within [0.0, 1.0] — enforced by `new`.
    pub confidence_score: f32,
    pub company_name: String,
    pub validation_reasoning: String,
    pub found_indicators: Vec<String>,
}

impl CareerPageResult {
    pub fn new(
        url: impl Into<String>,
        confidence_score: f32,
        company_name: impl Into<String>,
        validation_reasoning: impl Into<String>,
        found_indicators: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            confidence_score: confidence_score.clamp(0.0, 1.0),
            company_name: company_name.into(),
            validation_reasoning: validation_reasoning.into(),
            found_indicators,
        }
    }
}

/// Outcome of official-website discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResult {
    pub url: String,
    pub confidence: f32,
    pub notes: String,
}

impl SiteResult {
    pub fn new(url: impl Into<String>, confidence: f32, notes: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            confidence: confidence.clamp(0.0, 1.0),
            notes: notes.into(),
        }
    }
}
