use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod client;
mod config;
mod render;
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config()?;

    // Logs go to stderr so rendered views stay clean on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Client configuration: {:?}", config);

    let cli = Cli::parse();
    cli.run(&config).await
}
