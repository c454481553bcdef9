//! Basic structural inspection of a fetched page. Deliberately shallow: we
//! pull out the title, headings, link texts, and a bounded text excerpt, and
//! scan for careers-page indicator phrases. Judgment stays with the LLM.

use scraper::{Html, Selector};
use serde::Serialize;

/// Hard cap on the text excerpt handed to the LLM.
pub const MAX_EXCERPT_CHARS: usize = 6_000;
const MAX_LINK_TEXTS: usize = 60;
const MAX_HEADINGS: usize = 20;

/// Phrases whose presence on a page suggests it lists jobs. Checked
/// case-insensitively; German included because that is where this tool is
/// pointed most often.
pub const CAREER_INDICATORS: &[&str] = &[
    "apply",
    "apply now",
    "open positions",
    "open roles",
    "job openings",
    "vacancies",
    "join our team",
    "join us",
    "we are hiring",
    "careers",
    "jobs",
    "karriere",
    "stellenangebote",
    "jetzt bewerben",
    "offene stellen",
];

/// Condensed view of a page, small enough to embed in a prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub title: String,
    pub headings: Vec<String>,
    pub link_texts: Vec<String>,
    /// Indicator phrases actually present on the page.
    pub indicator_hits: Vec<String>,
    pub text_excerpt: String,
}

/// Summarizes rendered HTML. Never fails: unparseable input just produces an
/// empty summary, which the judge will score accordingly.
pub fn summarize(html: &str) -> PageSummary {
    let document = Html::parse_document(html);

    // Selectors are compile-time constants; parse cannot fail on them.
    let title_sel = Selector::parse("title").unwrap();
    let heading_sel = Selector::parse("h1, h2, h3").unwrap();
    let link_sel = Selector::parse("a").unwrap();
    let body_sel = Selector::parse("body").unwrap();

    let title = document
        .select(&title_sel)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<String>()))
        .unwrap_or_default();

    let headings: Vec<String> = document
        .select(&heading_sel)
        .map(|h| collapse_whitespace(&h.text().collect::<String>()))
        .filter(|h| !h.is_empty())
        .take(MAX_HEADINGS)
        .collect();

    let link_texts: Vec<String> = document
        .select(&link_sel)
        .map(|a| collapse_whitespace(&a.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .take(MAX_LINK_TEXTS)
        .collect();

    let body_text = document
        .select(&body_sel)
        .next()
        .map(|b| collapse_whitespace(&b.text().collect::<String>()))
        .unwrap_or_default();

    let haystack = format!(
        "{} {} {} {}",
        title.to_lowercase(),
        headings.join(" ").to_lowercase(),
        link_texts.join(" ").to_lowercase(),
        body_text.to_lowercase()
    );
    let indicator_hits: Vec<String> = CAREER_INDICATORS
        .iter()
        .filter(|phrase| haystack.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    PageSummary {
        title,
        headings,
        link_texts,
        indicator_hits,
        text_excerpt: truncate_chars(&body_text, MAX_EXCERPT_CHARS),
    }
}

/// Character-boundary-safe truncation.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAREERS_PAGE: &str = r#"
        <html>
          <head><title>Careers - Cubert GmbH</title></head>
          <body>
            <h1>Join our team</h1>
            <h2>Open Positions</h2>
            <div class="job-card">
              <a href="/jobs/optical-engineer">Optical Engineer (m/f/d)</a>
              <a href="/apply/optical-engineer">Apply now</a>
            </div>
            <p>We are hiring engineers in Ulm, Germany.</p>
          </body>
        </html>
    "#;

    const LANDING_PAGE: &str = r#"
        <html>
          <head><title>Cubert GmbH - Hyperspectral Cameras</title></head>
          <body>
            <h1>Hyperspectral imaging solutions</h1>
            <a href="/products">Products</a>
            <a href="/contact">Contact</a>
          </body>
        </html>
    "#;

    #[test]
    fn test_summarize_extracts_title_and_headings() {
        let summary = summarize(CAREERS_PAGE);
        assert_eq!(summary.title, "Careers - Cubert GmbH");
        assert_eq!(summary.headings, vec!["Join our team", "Open Positions"]);
    }

    #[test]
    fn test_summarize_finds_indicator_phrases() {
        let summary = summarize(CAREERS_PAGE);
        assert!(summary.indicator_hits.contains(&"apply now".to_string()));
        assert!(summary.indicator_hits.contains(&"open positions".to_string()));
        assert!(summary.indicator_hits.contains(&"we are hiring".to_string()));
    }

    #[test]
    fn test_landing_page_has_few_indicators() {
        let summary = summarize(LANDING_PAGE);
        assert!(!summary.indicator_hits.contains(&"apply now".to_string()));
        assert!(!summary.indicator_hits.contains(&"open positions".to_string()));
    }

    #[test]
    fn test_summarize_collects_link_texts() {
        let summary = summarize(CAREERS_PAGE);
        assert!(summary
            .link_texts
            .iter()
            .any(|t| t.contains("Optical Engineer")));
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = summarize("");
        assert!(summary.title.is_empty());
        assert!(summary.headings.is_empty());
        assert!(summary.indicator_hits.is_empty());
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let big = format!("<html><body><p>{}</p></body></html>", "word ".repeat(5000));
        let summary = summarize(&big);
        assert!(summary.text_excerpt.chars().count() <= MAX_EXCERPT_CHARS);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("grüße", 3), "grü");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
