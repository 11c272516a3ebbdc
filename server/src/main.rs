use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod checks;
mod http;

use common::config::{DEFAULT_CONFIG_PATH, read_config};

#[derive(Parser, Debug)]
#[command(version, about = "static host for the aromi site", long_about = None)]
struct Args {
    /// config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("aromi host starting up, processing config file");

    let config = read_config(&PathBuf::from(args.config)).await?;

    info!("performing doc_root sanity checks");

    checks::doc_root_ready(&config).context("doc_root is not ready to serve")?;

    http::serve_http(config).await
}
