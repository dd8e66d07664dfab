//! Bunny CDN Purge CLI
//!
//! Purges cached pages or whole pull zones on Bunny CDN and checks that the
//! configured access key can reach every zone.
//!
//! # Usage
//! ```bash
//! # Purge two pages
//! bunny-purge --zone-ids 12345 purge --base-url https://example.com blog about
//!
//! # Purge every configured zone
//! bunny-purge --zone-ids 12345,67890 purge-all
//!
//! # Check credentials against every zone
//! bunny-purge --zone-ids 12345,67890 test
//! ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bunny_purge::{BunnyCdnPurger, LogProgress, PurgerSettings, SiteUri, SiteUrlMap, API_ENDPOINT};

const CLI_SITE_ID: u32 = 1;

// ============================================================
// CLI Definition
// ============================================================

#[derive(Parser)]
#[command(name = "bunny-purge")]
#[command(about = "Bunny CDN cache purger", long_about = None)]
#[command(version)]
struct Cli {
    /// Bunny access key, or a $NAME placeholder
    #[arg(long, env = "BUNNY_ACCESS_KEY", hide_env_values = true)]
    access_key: String,

    /// Comma-separated pull zone IDs
    #[arg(long, env = "BUNNY_ZONE_IDS")]
    zone_ids: String,

    /// Bunny API endpoint
    #[arg(long, env = "BUNNY_API_ENDPOINT", default_value = API_ENDPOINT)]
    endpoint: String,

    /// HTTP timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON logs
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Purge specific pages
    Purge {
        /// Site base URL the URIs are relative to
        #[arg(long)]
        base_url: String,

        /// Page URIs (e.g., blog/post-1)
        #[arg(required = true)]
        uris: Vec<String>,
    },

    /// Purge every configured pull zone
    PurgeAll {
        /// Run inline instead of on a background queue
        #[arg(long)]
        no_queue: bool,
    },

    /// Check that every zone responds for the access key
    Test,
}

// ============================================================
// Main Entry Point
// ============================================================

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json)?;

    let settings = PurgerSettings::new(&cli.access_key, &cli.zone_ids)
        .with_endpoint(&cli.endpoint)
        .with_timeout(Duration::from_millis(cli.timeout_ms));
    settings.validate().context("Invalid purger settings")?;

    let mut builder = BunnyCdnPurger::builder(settings);
    if let Commands::Purge { base_url, .. } = &cli.command {
        builder = builder.url_resolver(SiteUrlMap::new().with_site(CLI_SITE_ID, base_url));
    }
    let purger = builder.build().context("Failed to build Bunny purger")?;

    match cli.command {
        Commands::Purge { uris, .. } => {
            let site_uris: Vec<SiteUri> = uris
                .into_iter()
                .map(|uri| SiteUri::new(CLI_SITE_ID, uri))
                .collect();

            purger.purge_uris(&site_uris, Some(&LogProgress)).await;
            info!("Purge finished");
        }

        Commands::PurgeAll { no_queue } => {
            info!(zones = purger.zones().len(), "Purging all zones");
            purger.purge_all(Some(&LogProgress), !no_queue).await;
            info!("Purge all finished");
        }

        Commands::Test => {
            let ok = purger.test().await;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "zones": purger.zones().len(), "ok": ok })
                );
            } else if ok {
                println!("✅ All {} zones reachable", purger.zones().len());
            } else {
                println!("❌ Connectivity test failed");
            }

            if !ok {
                warn!("Bunny connectivity test failed");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
