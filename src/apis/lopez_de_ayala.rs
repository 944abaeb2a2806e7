use super::site::{FieldRule, SiteConfig};
use crate::common::constants::{
    LOPEZ_DE_AYALA_SITE, LOPEZ_DE_AYALA_URL, LOPEZ_DE_AYALA_VENUE_NAME, NO_TIME_PLACEHOLDER,
};

/// Teatro López de Ayala (Badajoz) show list.
///
/// Each card carries two `.datePart` blocks: the date, followed by a
/// three-character tail, and the time, followed by a two-character tail.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        id: LOPEZ_DE_AYALA_SITE.to_string(),
        venue: LOPEZ_DE_AYALA_VENUE_NAME.to_string(),
        url: LOPEZ_DE_AYALA_URL.to_string(),
        item: ".cmsmasters_slider_project_outer".to_string(),
        title: FieldRule::new("span a"),
        image: "img".to_string(),
        date: FieldRule::new(".datePart").strip_suffix(3),
        time: Some(FieldRule::new(".datePart").at(1).strip_suffix(2)),
        time_placeholder: Some(NO_TIME_PLACEHOLDER.to_string()),
    }
}
