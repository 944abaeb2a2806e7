use crate::app::ports::HttpClientPort;
use crate::common::error::Result;
use serde::Serialize;

/// Show data as extracted from a listing page, before date normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShow {
    pub title: String,
    pub raw_date: String,
    pub time: Option<String>,
    pub venue: String,
    pub image: Option<String>,
}

/// A show record as written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub title: String,
    pub raw_date: String,
    pub time: Option<String>,
    pub venue: String,
    pub image: Option<String>,
    /// Normalized `DD-MM-YYYY` date, or the "Sin fecha" placeholder
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Show {
    pub fn from_raw(raw: RawShow, date: String) -> Self {
        Self {
            title: raw.title,
            raw_date: raw.raw_date,
            time: raw.time,
            venue: raw.venue,
            image: raw.image,
            date,
            image_path: None,
        }
    }
}

/// Core trait that all show listing sources must implement
#[async_trait::async_trait]
pub trait ShowApi: Send + Sync {
    /// Unique identifier for this site
    fn site_id(&self) -> &str;

    /// Venue name written into each record
    fn venue_name(&self) -> &str;

    /// Fetch all shows listed by this source
    async fn get_show_list(&self, http: &dyn HttpClientPort) -> Result<Vec<RawShow>>;

    /// Determine if a show should be dropped before normalization
    fn should_skip(&self, raw_show: &RawShow) -> (bool, String) {
        if raw_show.title.is_empty() {
            (true, "show has no title".to_string())
        } else {
            (false, String::new())
        }
    }
}
