pub mod gran_teatro;
pub mod lopez_de_ayala;
pub mod site;

use crate::common::types::ShowApi;
use site::{SiteConfig, SiteCrawler};

/// Built-in listing sites, in default scrape order
pub fn builtin_sites() -> Vec<SiteConfig> {
    vec![lopez_de_ayala::site_config(), gran_teatro::site_config()]
}

/// Look up a configured site by id and wrap it in a crawler
pub fn create_api(sites: &[SiteConfig], site_id: &str) -> Option<Box<dyn ShowApi>> {
    sites
        .iter()
        .find(|site| site.id == site_id)
        .map(|site| Box::new(SiteCrawler::new(site.clone())) as Box<dyn ShowApi>)
}
