use crate::app::ports::HttpClientPort;
use crate::common::error::Result;
use crate::common::types::{RawShow, ShowApi};
use crate::parser::parse_shows;
use serde::Deserialize;
use tracing::{info, instrument};

/// Where to find one text field inside a show card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldRule {
    pub selector: String,
    /// Which of the matching elements to read (0 = first)
    #[serde(default)]
    pub index: usize,
    /// Characters dropped from the end of the trimmed text
    #[serde(default)]
    pub strip_suffix_chars: usize,
}

impl FieldRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            index: 0,
            strip_suffix_chars: 0,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn strip_suffix(mut self, chars: usize) -> Self {
        self.strip_suffix_chars = chars;
        self
    }
}

/// Declarative description of one listing page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub id: String,
    pub venue: String,
    pub url: String,
    /// Selector for one show card
    pub item: String,
    pub title: FieldRule,
    #[serde(default = "default_image_selector")]
    pub image: String,
    pub date: FieldRule,
    #[serde(default)]
    pub time: Option<FieldRule>,
    /// Used when `time` is set but extracts nothing
    #[serde(default)]
    pub time_placeholder: Option<String>,
}

fn default_image_selector() -> String {
    "img".to_string()
}

/// Crawler driven entirely by a [`SiteConfig`]
pub struct SiteCrawler {
    site: SiteConfig,
}

impl SiteCrawler {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }
}

#[async_trait::async_trait]
impl ShowApi for SiteCrawler {
    fn site_id(&self) -> &str {
        &self.site.id
    }

    fn venue_name(&self) -> &str {
        &self.site.venue
    }

    #[instrument(skip(self, http), fields(site = %self.site.id))]
    async fn get_show_list(&self, http: &dyn HttpClientPort) -> Result<Vec<RawShow>> {
        let page = http.get(&self.site.url).await?;
        let body = page.text();
        let shows = parse_shows(&body, &self.site)?;
        info!("Successfully extracted {} shows from {}", shows.len(), self.site.venue);
        Ok(shows)
    }
}
