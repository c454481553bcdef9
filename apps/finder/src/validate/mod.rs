//! Validation wrapper — delegates judgment to the LLM and returns its
//! structured output verbatim, apart from clamping confidence into [0, 1].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::fetch::extract::PageSummary;
use crate::llm_client::LlmClient;
use crate::models::CompanyQuery;
use crate::search::SearchHit;

pub mod prompts;

/// LLM verdict on one careers-page candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageVerdict {
    pub is_careers_page: bool,
    pub confidence: f32,
    pub reasoning: String,
    #[serde(default)]
    pub indicators: Vec<String>,
}

impl PageVerdict {
    fn clamped(mut self) -> Self {
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }
}

/// LLM verdict on one official-website candidate, judged from search-result
/// metadata alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteVerdict {
    pub is_official_site: bool,
    pub confidence: f32,
    pub reasoning: String,
}

impl SiteVerdict {
    fn clamped(mut self) -> Self {
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }
}

/// Seam for LLM judgment, so the orchestrator can be tested with canned
/// verdicts. `LlmJudge` is the only production implementation.
#[async_trait]
pub trait Judge: Send + Sync {
    async fn judge_career_page(
        &self,
        company: &CompanyQuery,
        url: &str,
        summary: &PageSummary,
    ) -> Result<PageVerdict, AppError>;

    async fn judge_official_site(
        &self,
        company: &CompanyQuery,
        hit: &SearchHit,
    ) -> Result<SiteVerdict, AppError>;
}

/// Production judge backed by `LlmClient`.
pub struct LlmJudge {
    llm: LlmClient,
}

impl LlmJudge {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Judge for LlmJudge {
    async fn judge_career_page(
        &self,
        company: &CompanyQuery,
        url: &str,
        summary: &PageSummary,
    ) -> Result<PageVerdict, AppError> {
        let summary_json = serde_json::to_string_pretty(summary)
            .map_err(|e| AppError::Llm(format!("could not serialize page summary: {e}")))?;

        let prompt = build_career_page_prompt(company, url, &summary_json);
        let verdict: PageVerdict = self
            .llm
            .call_json(&prompt, prompts::CAREER_PAGE_SYSTEM)
            .await?;
        let verdict = verdict.clamped();

        debug!(
            url,
            is_careers_page = verdict.is_careers_page,
            confidence = verdict.confidence,
            "career-page verdict"
        );
        Ok(verdict)
    }

    async fn judge_official_site(
        &self,
        company: &CompanyQuery,
        hit: &SearchHit,
    ) -> Result<SiteVerdict, AppError> {
        let prompt = build_official_site_prompt(company, hit);
        let verdict: SiteVerdict = self
            .llm
            .call_json(&prompt, prompts::OFFICIAL_SITE_SYSTEM)
            .await?;
        let verdict = verdict.clamped();

        debug!(
            url = %hit.url,
            is_official_site = verdict.is_official_site,
            confidence = verdict.confidence,
            "official-site verdict"
        );
        Ok(verdict)
    }
}

fn build_career_page_prompt(company: &CompanyQuery, url: &str, summary_json: &str) -> String {
    prompts::CAREER_PAGE_TEMPLATE
        .replace("{company_name}", &company.name)
        .replace("{city}", &company.city)
        .replace("{country}", &company.country)
        .replace("{url}", url)
        .replace("{page_summary}", summary_json)
}

fn build_official_site_prompt(company: &CompanyQuery, hit: &SearchHit) -> String {
    prompts::OFFICIAL_SITE_TEMPLATE
        .replace("{company_name}", &company.name)
        .replace("{city}", &company.city)
        .replace("{country}", &company.country)
        .replace("{url}", &hit.url)
        .replace("{title}", &hit.title)
        .replace("{snippet}", &hit.snippet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyQuery {
        CompanyQuery::new("Asys", "Dornstadt", "Germany")
    }

    #[test]
    fn test_career_prompt_fills_all_placeholders() {
        let prompt = build_career_page_prompt(
            &company(),
            "https://www.asys-group.com/en/career/job-board",
            r#"{"title": "Job Board"}"#,
        );
        assert!(prompt.contains("Asys"));
        assert!(prompt.contains("Dornstadt"));
        assert!(prompt.contains("Germany"));
        assert!(prompt.contains("https://www.asys-group.com/en/career/job-board"));
        assert!(prompt.contains(r#"{"title": "Job Board"}"#));
        assert!(!prompt.contains("{company_name}"));
        assert!(!prompt.contains("{page_summary}"));
    }

    #[test]
    fn test_site_prompt_fills_all_placeholders() {
        let hit = SearchHit {
            url: "https://www.asys-group.com/".to_string(),
            title: "ASYS Group".to_string(),
            snippet: "Automation solutions from Dornstadt".to_string(),
        };
        let prompt = build_official_site_prompt(&company(), &hit);
        assert!(prompt.contains("https://www.asys-group.com/"));
        assert!(prompt.contains("ASYS Group"));
        assert!(prompt.contains("Automation solutions from Dornstadt"));
        assert!(!prompt.contains("{url}"));
        assert!(!prompt.contains("{snippet}"));
    }

    #[test]
    fn test_page_verdict_deserializes_without_indicators() {
        let verdict: PageVerdict = serde_json::from_str(
            r#"{"is_careers_page": false, "confidence": 0.2, "reasoning": "landing page"}"#,
        )
        .unwrap();
        assert!(!verdict.is_careers_page);
        assert!(verdict.indicators.is_empty());
    }

    #[test]
    fn test_page_verdict_clamps_confidence() {
        let verdict = PageVerdict {
            is_careers_page: true,
            confidence: 1.7,
            reasoning: String::new(),
            indicators: vec![],
        }
        .clamped();
        assert_eq!(verdict.confidence, 1.0);
    }

    #[test]
    fn test_site_verdict_clamps_confidence() {
        let verdict = SiteVerdict {
            is_official_site: true,
            confidence: -0.5,
            reasoning: String::new(),
        }
        .clamped();
        assert_eq!(verdict.confidence, 0.0);
    }
}
