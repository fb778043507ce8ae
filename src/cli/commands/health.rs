use anyhow::{bail, Result};
use common::HealthStatus;
use tracing::warn;

use crate::client::ForecastClient;

pub async fn check_health(client: &ForecastClient) -> Result<HealthStatus> {
    match client.health().await {
        Ok(status) if status.is_ok() => Ok(status),
        Ok(status) => bail!("backend reported status {:?}", status.status),
        Err(e) => {
            warn!("Health check against {} failed: {}", client.api_base(), e);
            bail!("backend unreachable: {}", e)
        }
    }
}
