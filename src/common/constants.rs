/// Site name constants to ensure consistency across the codebase
/// These are the ids accepted by `--sites` and used in log fields

// Site ids (used in CLI and config)
pub const LOPEZ_DE_AYALA_SITE: &str = "lopez_de_ayala";
pub const GRAN_TEATRO_SITE: &str = "gran_teatro";

// Venue names (written into every show record)
pub const LOPEZ_DE_AYALA_VENUE_NAME: &str = "Teatro López de Ayala";
pub const GRAN_TEATRO_VENUE_NAME: &str = "Gran Teatro de Cáceres";

// Listing pages
pub const LOPEZ_DE_AYALA_URL: &str = "https://www.teatrolopezdeayala.es/shows/list";
pub const GRAN_TEATRO_URL: &str = "https://www.granteatrocc.com/";

/// Written to `date` when the fragment could not be normalized.
pub const NO_DATE_PLACEHOLDER: &str = "Sin fecha";
/// Written to `time` when a site has a time field but it came back empty.
pub const NO_TIME_PLACEHOLDER: &str = "Sin hora";

pub const DEFAULT_OUTPUT_FILE: &str = "data.json";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_IMAGE_EXTENSION: &str = ".jpg";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_LOG_DIR: &str = "logs";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Environment overrides
pub const USER_AGENT_ENV: &str = "SHOWS_USER_AGENT";
pub const HTTP_TIMEOUT_ENV: &str = "SHOWS_HTTP_TIMEOUT_SECS";

/// Get all built-in site ids, in the order they are scraped by default
pub fn get_supported_sites() -> Vec<&'static str> {
    vec![LOPEZ_DE_AYALA_SITE, GRAN_TEATRO_SITE]
}
