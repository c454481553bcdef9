//! Orchestrator: search → fetch → validate, sequentially, keep the highest
//! score. All judgment is delegated; this module only wires the steps and
//! picks the winner.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::discovery::find_official_site;
use crate::errors::AppError;
use crate::fetch::{extract, PageFetcher};
use crate::models::{CareerPageResult, CompanyQuery};
use crate::search::{career_page_queries, SearchProvider};
use crate::validate::Judge;


pub const DEFAULT_MAX_CANDIDATES: usize = 5;

pub struct CareerPageFinder {
    search: Arc<dyn SearchProvider>,
    fetcher: Arc<dyn PageFetcher>,
    judge: Arc<dyn Judge>,
    max_candidates: usize,
}

impl CareerPageFinder {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        fetcher: Arc<dyn PageFetcher>,
        judge: Arc<dyn Judge>,
    ) -> Self {
        Self {
            search,
            fetcher,
            judge,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    /// Full pipeline for one company. Candidates are processed in search
    /// order; ties keep the earlier candidate, since search order is the only
    /// relevance prior we have.
    pub async fn find(&self, company: &CompanyQuery) -> Result<CareerPageResult, AppError> {
        info!(company = %company, "looking for careers page");

        let company = self.resolve_website(company).await;
        let candidates = self.collect_candidates(&company).await?;
        if candidates.is_empty() {
            return Err(AppError::NoCandidates(company.to_string()));
        }
        info!(count = candidates.len(), "judging candidates");

        let mut best: Option<CareerPageResult> = None;

        for url in &candidates {
            let html = match self.fetcher.fetch(url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(%url, "skipping candidate, fetch failed: {e}");
                    continue;
                }
            };
            let summary = extract::summarize(&html);

            let verdict = match self.judge.judge_career_page(&company, url, &summary).await {
                Ok(v) => v,
                Err(e) => {
                    warn!(%url, "skipping candidate, judgment failed: {e}");
                    continue;
                }
            };
            debug!(
                %url,
                confidence = verdict.confidence,
                is_careers_page = verdict.is_careers_page,
                "candidate judged"
            );

            if !verdict.is_careers_page {
                continue;
            }

            let better = best
                .as_ref()
                .map(|b| verdict.confidence > b.confidence_score)
                .unwrap_or(true);
            if better {
                best = Some(CareerPageResult::new(
                    url.clone(),
                    verdict.confidence,
                    company.name.clone(),
                    verdict.reasoning,
                    verdict.indicators,
                ));
            }
        }

        match best {
            Some(result) => {
                info!(
                    url = %result.url,
                    confidence = result.confidence_score,
                    "careers page found"
                );
                Ok(result)
            }
            None => Err(AppError::NoCandidates(company.to_string())),
        }
    }

    /// Makes sure the query carries an official website when one can be
    /// found. Discovery failure is not fatal: the career-page queries work
    /// without a domain anchor, just less precisely.
    async fn resolve_website(&self, company: &CompanyQuery) -> CompanyQuery {
        if company.website.is_some() {
            return company.clone();
        }

        match find_official_site(company, self.search.as_ref(), self.judge.as_ref()).await {
            Ok(site) => company.clone().with_website(site.url),
            Err(e) => {
                warn!(company = %company, "website discovery failed, continuing without: {e}");
                company.clone()
            }
        }
    }

    /// First query phrasing that returns hits supplies the candidate list,
    /// deduplicated and capped.
    async fn collect_candidates(&self, company: &CompanyQuery) -> Result<Vec<String>, AppError> {
        for query in career_page_queries(company) {
            let hits = self.search.search(&query, self.max_candidates * 2).await?;
            if hits.is_empty() {
                debug!(%query, "no hits, trying next phrasing");
                continue;
            }

            let mut seen = std::collections::HashSet::new();
            let urls: Vec<String> = hits
                .into_iter()
                .map(|h| h.url)
                .filter(|u| seen.insert(u.clone()))
                .take(self.max_candidates)
                .collect();
            return Ok(urls);
        }
        Ok(Vec::new())
    }
}
