pub mod prediction;

use common::{classify_rejection, ForecastError};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ForecastError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            ForecastError::Network(e.to_string())
        })?;

    parse_response("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ForecastError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            // Only a non-serializable body fails here; nothing was sent.
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            ForecastError::Network(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ForecastError::Network(e.to_string())
        })?;

    parse_response("POST", endpoint, response).await
}

async fn parse_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ForecastError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let body = response.text().await.unwrap_or_default();
        let err = classify_rejection(status, &body);
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
        ForecastError::Decode(e.to_string())
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}
