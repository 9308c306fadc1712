use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use genius_artists::{AppConfig, GeniusClient};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
}

#[derive(Parser)]
#[command(name = "genius-artists")]
#[command(version, about = "Look up artists on Genius and print a summary table", long_about = None)]
struct Cli {
    /// Artist names to search for
    #[arg(default_values = ["Rihanna", "Tycho", "Seal", "U2"])]
    terms: Vec<String>,

    #[arg(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, env = "GENIUS_BASE_URL")]
    base_url: Option<String>,

    /// Searches in flight at once; 1 runs them strictly one after another
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::new(cli.token).with_concurrency(cli.concurrency);
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let client = GeniusClient::new(&config)?;

    info!("Looking up {} search terms ...", cli.terms.len());
    let report = if config.concurrency() > 1 {
        client
            .get_artists_concurrent(cli.terms, config.concurrency())
            .await
    } else {
        client.get_artists(cli.terms).await
    };

    match cli.format {
        OutputFormat::Table => println!("{report}"),
        OutputFormat::Csv => report
            .write_csv(io::stdout().lock())
            .context("failed to write csv report")?,
    }

    info!(
        "{} rows returned, {} without a match",
        report.len(),
        report.degraded_count()
    );
    Ok(())
}
