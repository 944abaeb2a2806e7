// Scrape pipeline: fetch listing pages, normalize dates, download posters, persist

pub mod images;
pub mod normalize;

use crate::app::ports::HttpClientPort;
use crate::common::constants::NO_DATE_PLACEHOLDER;
use crate::common::error::Result;
use crate::common::types::{RawShow, Show, ShowApi};
use images::ImageDownloader;
use metrics::counter;
use normalize::DateNormalizer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Where a run writes its results
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub output_file: PathBuf,
    pub images_dir: PathBuf,
    pub download_images: bool,
}

/// Per-site outcome of a run
#[derive(Debug, Clone, Default)]
pub struct SiteResult {
    pub site_id: String,
    pub total_shows: usize,
    pub kept_shows: usize,
    pub skipped_shows: usize,
    pub undated_shows: usize,
    pub images_downloaded: usize,
    pub error: Option<String>,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub sites: Vec<SiteResult>,
    pub total_shows: usize,
    pub output_file: String,
}

pub struct Pipeline<'a> {
    http: &'a dyn HttpClientPort,
    normalizer: DateNormalizer,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(http: &'a dyn HttpClientPort, normalizer: DateNormalizer, options: PipelineOptions) -> Self {
        Self {
            http,
            normalizer,
            options,
        }
    }

    /// Turn extracted shows into records: drop skipped ones, fill `date`
    fn process_shows(
        &self,
        api: &dyn ShowApi,
        raw_shows: Vec<RawShow>,
        result: &mut SiteResult,
    ) -> Vec<Show> {
        let mut shows = Vec::with_capacity(raw_shows.len());
        for raw_show in raw_shows {
            let (should_skip, skip_reason) = api.should_skip(&raw_show);
            if should_skip {
                debug!("Skipping show: {}", skip_reason);
                result.skipped_shows += 1;
                continue;
            }

            let date = match self.normalizer.normalize(Some(raw_show.raw_date.as_str())) {
                Some(date) => date.to_string(),
                None => {
                    debug!("No date recognized in '{}' for {}", raw_show.raw_date, raw_show.title);
                    result.undated_shows += 1;
                    NO_DATE_PLACEHOLDER.to_string()
                }
            };
            shows.push(Show::from_raw(raw_show, date));
        }
        shows
    }

    /// Run fetch, extraction, normalization and image download for one site
    #[instrument(skip(self, api), fields(site = %api.site_id()))]
    pub async fn run_for_api(&self, api: &dyn ShowApi) -> Result<(Vec<Show>, SiteResult)> {
        let site_id = api.site_id().to_string();
        info!("🚀 Starting scrape for {}", api.venue_name());
        counter!("shows_site_runs_total", "site" => site_id.clone()).increment(1);

        let mut result = SiteResult {
            site_id: site_id.clone(),
            ..SiteResult::default()
        };

        let raw_shows = api.get_show_list(self.http).await?;
        result.total_shows = raw_shows.len();

        let mut shows = self.process_shows(api, raw_shows, &mut result);
        result.kept_shows = shows.len();

        if self.options.download_images {
            let record_base = self.options.output_file.parent().unwrap_or(Path::new(""));
            let downloader = ImageDownloader::new(self.http, &self.options.images_dir).relative_to(record_base);
            result.images_downloaded = downloader.process_images(&mut shows).await?;
        }

        info!(
            "✅ {}: {} shows kept ({} skipped, {} undated, {} images)",
            site_id, result.kept_shows, result.skipped_shows, result.undated_shows, result.images_downloaded
        );
        counter!("shows_extracted_total", "site" => site_id.clone()).increment(result.kept_shows as u64);
        counter!("shows_undated_total", "site" => site_id).increment(result.undated_shows as u64);

        Ok((shows, result))
    }

    /// Run every api in order, merge their shows and write the output file.
    ///
    /// A failing site is logged and reported in its [`SiteResult`]; the
    /// remaining sites still run.
    pub async fn run(&self, apis: &[Box<dyn ShowApi>]) -> Result<PipelineResult> {
        let mut all_shows = Vec::new();
        let mut site_results = Vec::with_capacity(apis.len());

        for api in apis {
            match self.run_for_api(api.as_ref()).await {
                Ok((shows, result)) => {
                    all_shows.extend(shows);
                    site_results.push(result);
                }
                Err(e) => {
                    error!("Scrape failed for {}: {}", api.site_id(), e);
                    counter!("shows_site_errors_total", "site" => api.site_id().to_string()).increment(1);
                    site_results.push(SiteResult {
                        site_id: api.site_id().to_string(),
                        error: Some(e.to_string()),
                        ..SiteResult::default()
                    });
                }
            }
        }

        if all_shows.is_empty() {
            warn!("No shows extracted from any site");
        }

        let output_file = Self::persist_to_json(&all_shows, &self.options.output_file)?;
        info!("💾 All data stored in {}", output_file);

        Ok(PipelineResult {
            sites: site_results,
            total_shows: all_shows.len(),
            output_file,
        })
    }

    /// Write shows as a pretty-printed JSON array
    pub fn persist_to_json(shows: &[Show], path: &Path) -> Result<String> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json_content = serde_json::to_string_pretty(shows)?;
        fs::write(path, json_content)?;
        Ok(path.to_string_lossy().to_string())
    }
}
