//! Search wrapper — builds query strings and returns candidate URLs from the
//! Serper API. No ranking of its own beyond the order Serper returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::CompanyQuery;

const SERPER_API_URL: &str = "https://google.serper.dev/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One organic search result, as much of it as the judges need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// Seam for the web-search service, so the orchestrator can be exercised
/// without network access.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, AppError>;
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicHit>,
}

#[derive(Debug, Deserialize)]
struct OrganicHit {
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

/// Serper (google.serper.dev) client.
pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SerperClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            endpoint: SERPER_API_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, AppError> {
        debug!(query, max_results, "running web search");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&SerperRequest {
                q: query,
                num: max_results,
            })
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Serper request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "search API returned an error: {body}");
            return Err(AppError::Search(format!(
                "Serper returned status {status}: {body}"
            )));
        }

        let parsed: SerperResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("could not parse Serper response: {e}")))?;

        let hits = parsed
            .organic
            .into_iter()
            .take(max_results)
            .map(|h| SearchHit {
                url: h.link,
                title: h.title,
                snippet: h.snippet,
            })
            .collect::<Vec<_>>();

        debug!(count = hits.len(), "search returned hits");
        Ok(hits)
    }
}

/// Query phrasings for careers-page search, tried in order until one returns
/// hits. When the official website is known the first phrasing anchors on its
/// domain, which in practice filters out job boards and aggregators.
pub fn career_page_queries(company: &CompanyQuery) -> Vec<String> {
    let mut queries = Vec::new();

    if let Some(website) = &company.website {
        if let Some(domain) = registrable_host(website) {
            queries.push(format!("{} careers site:{domain}", company.name));
            queries.push(format!(
                "careers page for \"{}\" under {website}",
                company.name
            ));
        }
    }

    queries.push(format!(
        "\"{}\" {} {} careers jobs",
        company.name, company.city, company.country
    ));
    queries.push(format!(
        "{} {} {} career page open positions",
        company.name, company.city, company.country
    ));

    queries
}

/// Query phrasings for official-website discovery, same fallback scheme.
pub fn official_site_queries(company: &CompanyQuery) -> Vec<String> {
    vec![
        format!(
            "\"{}\" {} {}",
            company.name, company.city, company.country
        ),
        format!(
            "{} {} {} official website",
            company.name, company.city, company.country
        ),
        format!(
            "{} company {} {}",
            company.name, company.city, company.country
        ),
    ]
}

/// Host portion of a URL, without a leading `www.`.
pub fn registrable_host(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyQuery {
        CompanyQuery::new("Cubert", "Ulm", "Germany")
    }

    #[test]
    fn test_career_queries_without_website() {
        let queries = career_page_queries(&company());
        assert_eq!(queries.len(), 2);
        assert!(queries[0].contains("\"Cubert\""));
        assert!(queries[0].contains("Ulm"));
        assert!(queries[0].contains("Germany"));
    }

    #[test]
    fn test_career_queries_anchor_on_known_domain() {
        let queries =
            career_page_queries(&company().with_website("https://www.cubert-hyperspectral.com/"));
        assert_eq!(queries.len(), 4);
        assert!(queries[0].contains("site:cubert-hyperspectral.com"));
    }

    #[test]
    fn test_site_queries_mention_location() {
        let queries = official_site_queries(&company());
        assert_eq!(queries.len(), 3);
        for q in &queries {
            assert!(q.contains("Ulm") && q.contains("Germany"), "missing location in {q}");
        }
    }

    #[test]
    fn test_registrable_host_strips_www() {
        assert_eq!(
            registrable_host("https://www.asys-group.com/en/career").as_deref(),
            Some("asys-group.com")
        );
    }

    #[test]
    fn test_registrable_host_rejects_garbage() {
        assert_eq!(registrable_host("not a url"), None);
    }

    #[tokio::test]
    async fn test_serper_client_parses_organic_results() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("x-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "organic": [
                        {"link": "https://cubert-hyperspectral.com/en/career/",
                         "title": "Career - Cubert GmbH",
                         "snippet": "Open positions at Cubert"},
                        {"link": "https://example.org/jobs", "title": "Jobs"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = SerperClient::new("test-key".to_string())
            .unwrap()
            .with_endpoint(server.url());
        let hits = client.search("cubert careers", 10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://cubert-hyperspectral.com/en/career/");
        assert_eq!(hits[1].snippet, "");
    }

    #[tokio::test]
    async fn test_serper_client_truncates_to_max_results() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(
                r#"{"organic": [
                    {"link": "https://a.example/"},
                    {"link": "https://b.example/"},
                    {"link": "https://c.example/"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = SerperClient::new("k".to_string())
            .unwrap()
            .with_endpoint(server.url());
        let hits = client.search("q", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_serper_client_surfaces_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(403)
            .with_body("invalid api key")
            .create_async()
            .await;

        let client = SerperClient::new("bad".to_string())
            .unwrap()
            .with_endpoint(server.url());
        let err = client.search("q", 5).await.unwrap_err();
        assert!(matches!(err, AppError::Search(_)));
    }

    #[tokio::test]
    async fn test_serper_client_handles_missing_organic_key() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"searchParameters": {"q": "nothing"}}"#)
            .create_async()
            .await;

        let client = SerperClient::new("k".to_string())
            .unwrap()
            .with_endpoint(server.url());
        let hits = client.search("q", 5).await.unwrap();
        assert!(hits.is_empty());
    }
}
