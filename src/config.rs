use anyhow::Result;
use common::{resolve_api_base, DEFAULT_API_BASE};
use serde::Deserialize;

const DEFAULT_LOG_FILTER: &str = "surgecast=info,common=info";

/// Client configuration, layered: defaults, then `.env`, then `SURGE_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Forecasting backend base URL (`SURGE_API_BASE`)
    pub api_base: String,
    /// Tracing filter used when `RUST_LOG` is unset (`SURGE_LOG_FILTER`)
    pub log_filter: String,
}

/// Load configuration once at startup
pub fn load_config() -> Result<ClientConfig> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("api_base", DEFAULT_API_BASE)?
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        .add_source(config::Environment::with_prefix("SURGE"))
        .build()?;

    let mut client_config: ClientConfig = settings.try_deserialize()?;
    client_config.api_base = resolve_api_base(Some(&client_config.api_base));
    Ok(client_config)
}
