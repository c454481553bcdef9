use serde::{Deserialize, Serialize};

/// The company a lookup is about. Built once from CLI arguments and passed
/// by reference through the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyQuery {
    pub name: String,
    pub city: String,
    pub country: String,
    /// Official website, if the caller already knows it. When absent the
    /// finder runs website discovery first.
    pub website: Option<String>,
}

impl CompanyQuery {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            website: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

impl std::fmt::Display for CompanyQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.city, self.country)
    }
}
