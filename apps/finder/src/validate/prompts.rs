// Prompts for the two LLM judgments: is a page the company's careers page,
// and is a search hit the company's official website.

/// System prompt for careers-page judgment.
pub const CAREER_PAGE_SYSTEM: &str = "You are a careful web validator. \
    You judge whether a web page is a company's careers page, meaning a page \
    where the company's open job positions are actually listed. \
    An HR information page without listings does not count. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Careers-page judgment template. Placeholders: `{company_name}`, `{city}`,
/// `{country}`, `{url}`, `{page_summary}`.
pub const CAREER_PAGE_TEMPLATE: &str = r#"Decide whether the page below is the careers page of this company.

Company:
- Name: {company_name}
- City: {city}
- Country: {country}

Page URL: {url}

Page summary (title, headings, link texts, indicator phrases found, text excerpt):
{page_summary}

Consider:
1. Does the page belong to this company (domain, branding), not a job board or aggregator?
2. Are job positions listed directly on the page (job titles, apply links, job cards)?
3. Careers pages hosted on the company's applicant-tracking subdomain still count.

Return a JSON object with this EXACT schema (no extra fields):
{
  "is_careers_page": true,
  "confidence": 0.9,
  "reasoning": "short justification",
  "indicators": ["Apply now", "Optical Engineer (m/f/d)"]
}

"confidence" is between 0.0 and 1.0. "indicators" quotes text snippets from
the page that support your decision; leave it empty if there are none.
Be strict: only use confidence above 0.7 when jobs are clearly listed."#;

/// System prompt for official-website judgment.
pub const OFFICIAL_SITE_SYSTEM: &str = "You are a careful web validator. \
    You judge whether a search result is the official website of a given \
    company, using only the result's URL, title, and snippet. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Official-website judgment template. Placeholders: `{company_name}`,
/// `{city}`, `{country}`, `{url}`, `{title}`, `{snippet}`.
pub const OFFICIAL_SITE_TEMPLATE: &str = r#"Decide whether this search result is the official website of the company.

Company:
- Name: {company_name}
- City: {city}
- Country: {country}

Search result:
- URL: {url}
- Title: {title}
- Snippet: {snippet}

Consider:
1. Does the domain plausibly match the company name?
2. Do title and snippet describe this company in this location?
3. Directories, social-media profiles, and news articles are NOT the official site.

Return a JSON object with this EXACT schema (no extra fields):
{
  "is_official_site": true,
  "confidence": 0.85,
  "reasoning": "short justification"
}

Be strict: only approve when you are confident this is the right company."#;
