use super::site::{FieldRule, SiteConfig};
use crate::common::constants::{GRAN_TEATRO_SITE, GRAN_TEATRO_URL, GRAN_TEATRO_VENUE_NAME};

/// Gran Teatro de Cáceres home page event grid. No time is published.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        id: GRAN_TEATRO_SITE.to_string(),
        venue: GRAN_TEATRO_VENUE_NAME.to_string(),
        url: GRAN_TEATRO_URL.to_string(),
        item: ".cbp-item-wrapper".to_string(),
        title: FieldRule::new(".listaeventostit"),
        image: "img".to_string(),
        date: FieldRule::new(".listaeventosfecha_txt"),
        time: None,
        time_placeholder: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_shows;

    #[test]
    fn test_extracts_grid_items() {
        let html = r#"
            <div class="cbp-item-wrapper">
              <a href="/evento/1"><img src="https://www.granteatrocc.com/img/eventos/la-celestina.jpg"></a>
              <div class="listaeventostit">La Celestina</div>
              <div class="listaeventosfecha_txt">
                 19 sep. 2025
              </div>
            </div>
            <div class="cbp-item-wrapper">
              <div class="listaeventostit"></div>
            </div>
        "#;

        let shows = parse_shows(html, &site_config()).unwrap();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].title, "La Celestina");
        assert_eq!(shows[0].raw_date, "19 sep. 2025");
        assert_eq!(shows[0].time, None);
        assert_eq!(shows[0].venue, "Gran Teatro de Cáceres");
        assert_eq!(
            shows[0].image.as_deref(),
            Some("https://www.granteatrocc.com/img/eventos/la-celestina.jpg")
        );
        assert_eq!(shows[1].title, "");
    }
}
