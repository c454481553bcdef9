//! Official-website discovery. Runs when the caller does not already know
//! the company's homepage: search for the company, let the LLM judge the top
//! hits from their URL/title/snippet alone, take the first approved one.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{CompanyQuery, SiteResult};
use crate::search::{official_site_queries, SearchProvider};
use crate::validate::Judge;

/// How many hits per query the judge looks at. The official site is almost
/// always near the top when it exists at all.
const MAX_HITS_TO_JUDGE: usize = 3;

pub async fn find_official_site(
    company: &CompanyQuery,
    search: &dyn SearchProvider,
    judge: &dyn Judge,
) -> Result<SiteResult, AppError> {
    info!(company = %company, "discovering official website");

    for query in official_site_queries(company) {
        let hits = search.search(&query, MAX_HITS_TO_JUDGE).await?;
        if hits.is_empty() {
            debug!(%query, "no hits, trying next phrasing");
            continue;
        }

        for hit in &hits {
            let verdict = match judge.judge_official_site(company, hit).await {
                Ok(v) => v,
                Err(e) => {
                    warn!(url = %hit.url, "official-site judgment failed: {e}");
                    continue;
                }
            };

            if verdict.is_official_site {
                info!(url = %hit.url, confidence = verdict.confidence, "official site found");
                return Ok(SiteResult::new(
                    hit.url.clone(),
                    verdict.confidence,
                    verdict.reasoning,
                ));
            }
            debug!(url = %hit.url, "rejected: {}", verdict.reasoning);
        }
    }

    Err(AppError::NoOfficialSite(company.to_string()))
}
