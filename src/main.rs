use anyhow::Context;
use clap::{Parser, Subcommand};
use show_scraper::apis::create_api;
use show_scraper::common::constants::{DEFAULT_LOG_DIR, NO_DATE_PLACEHOLDER};
use show_scraper::common::types::ShowApi;
use show_scraper::config::Config;
use show_scraper::infra::http_client::ReqwestHttp;
use show_scraper::logging;
use show_scraper::pipeline::{Pipeline, PipelineOptions};
use show_scraper::DateNormalizer;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "show_scraper")]
#[command(about = "Theater show listing scraper for Extremadura venues (Badajoz and Cáceres)")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape listings, download posters and write the JSON file
    Scrape {
        /// Specific sites to run (comma-separated). Available: lopez_de_ayala, gran_teatro
        #[arg(long)]
        sites: Option<String>,
        /// Output JSON file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Directory for downloaded posters
        #[arg(long)]
        images_dir: Option<PathBuf>,
        /// Skip poster downloads
        #[arg(long)]
        no_images: bool,
    },
    /// Normalize one Spanish date fragment and print the result
    NormalizeDate {
        /// Text such as "Miércoles 06 de agosto" or "19 sep. 2025"
        text: String,
    },
    /// List configured sites
    Sites,
}

fn select_apis(config: &Config, sites: Option<String>) -> Vec<Box<dyn ShowApi>> {
    let configured = config.resolved_sites();
    let site_ids: Vec<String> = match sites {
        Some(list) => list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => configured.iter().map(|s| s.id.clone()).collect(),
    };

    site_ids
        .iter()
        .filter_map(|site_id| {
            let api = create_api(&configured, site_id);
            if api.is_none() {
                warn!("Unknown site specified: {}", site_id);
                println!("⚠️  Unknown site: {}", site_id);
            }
            api
        })
        .collect()
}

async fn run_scrape(
    config: Config,
    sites: Option<String>,
    output: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    no_images: bool,
) -> anyhow::Result<()> {
    let apis = select_apis(&config, sites);
    if apis.is_empty() {
        anyhow::bail!("no known sites selected");
    }

    let options = PipelineOptions {
        output_file: output.unwrap_or(config.output.data_file),
        images_dir: images_dir.unwrap_or(config.output.images_dir),
        download_images: config.output.download_images && !no_images,
    };

    let http = ReqwestHttp::new(&config.http.user_agent, config.http.timeout_seconds)
        .context("failed to build HTTP client")?;
    let pipeline = Pipeline::new(&http, DateNormalizer::new(), options);

    println!("🔄 Scraping {} site(s)...", apis.len());
    let result = pipeline.run(&apis).await.context("scrape run failed")?;

    for site in &result.sites {
        println!("\n📊 Results for {}:", site.site_id);
        match &site.error {
            Some(e) => println!("   ❌ Failed: {}", e),
            None => {
                println!("   Shows found: {}", site.total_shows);
                println!("   Kept: {}", site.kept_shows);
                println!("   Without date: {}", site.undated_shows);
                println!("   Images downloaded: {}", site.images_downloaded);
            }
        }
    }
    println!("\n💾 {} shows stored in {}", result.total_shows, result.output_file);
    info!("Scrape finished with {} shows", result.total_shows);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging(Path::new(DEFAULT_LOG_DIR));

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            sites,
            output,
            images_dir,
            no_images,
        } => {
            let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
            if let Err(e) = run_scrape(config, sites, output, images_dir, no_images).await {
                error!("Scrape failed: {:#}", e);
                return Err(e);
            }
        }
        Commands::NormalizeDate { text } => {
            match DateNormalizer::new().normalize(Some(text.as_str())) {
                Some(date) => println!("{date}"),
                None => println!("{NO_DATE_PLACEHOLDER}"),
            }
        }
        Commands::Sites => {
            let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
            for site in config.resolved_sites() {
                println!("{:<16} {:<26} {}", site.id, site.venue, site.url);
            }
        }
    }
    Ok(())
}
