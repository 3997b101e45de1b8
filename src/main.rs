use anyhow::{Context, Result};
use clap::Parser;
use finvani::api::ApiClient;
use finvani::config::Config;
use finvani::logger::Logger;
use finvani::ui;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal dashboard for MSME financial-news sentiment
#[derive(Parser, Debug)]
#[command(name = "finvani")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./finvani.toml, then the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file and FINVANI_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Write a commented default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    generate_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = if path.as_os_str().is_empty() {
            Config::get_default_config_path()?
        } else {
            path
        };
        return Config::generate_default_config(&path);
    }

    let config = Config::resolve(cli.config.as_deref(), cli.api_url).context("Invalid configuration")?;

    let logger = Logger::from_config(&config.logging)?;
    let api = ApiClient::new(&config.api).context("Failed to create API client")?;
    log::info!("Using backend at {}", api.base_url());

    ui::run_app(Arc::new(api), &config, logger).await
}
