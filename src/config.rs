use crate::apis::builtin_sites;
use crate::apis::site::SiteConfig;
use crate::common::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_IMAGES_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECONDS,
    DEFAULT_USER_AGENT, HTTP_TIMEOUT_ENV, USER_AGENT_ENV,
};
use crate::common::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub output: OutputConfig,
    /// Extra sites, or overrides of built-in sites with the same id
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub data_file: PathBuf,
    pub images_dir: PathBuf,
    pub download_images: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            download_images: true,
        }
    }
}

impl Config {
    /// Load from `path`, or from `config.toml` in the working directory when it
    /// exists, falling back to defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(user_agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            self.http.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(HTTP_TIMEOUT_ENV) {
            self.http.timeout_seconds = timeout.trim().parse().map_err(|e| {
                ScraperError::Config(format!("{HTTP_TIMEOUT_ENV} must be a number of seconds: {e}"))
            })?;
        }
        Ok(())
    }

    /// Built-in sites with configured overrides applied, then configured extras
    pub fn resolved_sites(&self) -> Vec<SiteConfig> {
        let mut sites = builtin_sites();
        for configured in &self.sites {
            match sites.iter_mut().find(|s| s.id == configured.id) {
                Some(existing) => *existing = configured.clone(),
                None => sites.push(configured.clone()),
            }
        }
        sites
    }
}
