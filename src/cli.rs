use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use common::{resolve_api_base, City};

pub mod commands;

use crate::client::ForecastClient;
use crate::config::ClientConfig;
use crate::render::ViewKind;
use commands::{check_health, predict};

#[derive(Parser)]
#[command(name = "surgecast")]
#[command(about = "Hospital surge forecasts for Indian cities")]
#[command(version)]
pub struct Cli {
    /// Forecasting backend base URL
    ///
    /// Falls back to SURGE_API_BASE (also read from .env), then http://localhost:8000.
    #[arg(long, global = true, env = "SURGE_API_BASE")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a surge prediction and render it
    ///
    /// Examples:
    ///   surgecast predict --city Delhi --date 2024-11-01
    ///   surgecast predict --city pune --view resources
    Predict {
        /// One of Mumbai, Delhi, Bangalore, Kolkata, Chennai, Hyderabad, Pune
        #[arg(short, long, default_value = "Mumbai")]
        city: City,

        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Which view to print
        #[arg(short, long, value_enum, default_value_t = ViewKind::All)]
        view: ViewKind,
    },
    /// Check that the forecasting backend is reachable
    Health,
}

impl Cli {
    pub async fn run(self, config: &ClientConfig) -> Result<()> {
        let api_base = resolve_api_base(self.api_base.as_deref().or(Some(config.api_base.as_str())));
        let client = ForecastClient::new(&api_base);

        match self.command {
            Commands::Predict { city, date, view } => {
                let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
                let output = predict(&client, city, date, view).await?;
                print!("{}", output);
            }
            Commands::Health => {
                let status = check_health(&client).await?;
                println!("{}: {}", client.api_base(), status.status);
            }
        }
        Ok(())
    }
}
