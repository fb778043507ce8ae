//! Native forecast client over `reqwest`.

use common::{
    classify_rejection, endpoint_url, resolve_api_base, ForecastError, HealthStatus,
    PredictionRecord, PredictionRequest, HEALTH_PATH, PREDICT_PATH,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    api_base: String,
}

impl ForecastClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: resolve_api_base(Some(api_base)),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `POST /predict`. No timeout is imposed; the caller decides how long to wait.
    #[instrument(skip(self, request), fields(city = %request.city, date = %request.date))]
    pub async fn request_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionRecord, ForecastError> {
        let url = endpoint_url(&self.api_base, PREDICT_PATH);
        debug!("POST request to: {}", url);

        let response = self.http.post(&url).json(request).send().await.map_err(|e| {
            error!("POST {} - Request failed: {}", PREDICT_PATH, e);
            ForecastError::Network(e.to_string())
        })?;

        let record: PredictionRecord = parse_response(PREDICT_PATH, response).await?;
        info!("Received prediction for {} on {}", record.city, record.date);
        Ok(record)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ForecastError> {
        let url = endpoint_url(&self.api_base, HEALTH_PATH);
        debug!("GET request to: {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", HEALTH_PATH, e);
            ForecastError::Network(e.to_string())
        })?;

        parse_response(HEALTH_PATH, response).await
    }
}

async fn parse_response<T>(endpoint: &str, response: reqwest::Response) -> Result<T, ForecastError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        warn!("{} - Non-OK response: {}", endpoint, status);
        let body = response.text().await.unwrap_or_default();
        return Err(classify_rejection(status.as_u16(), &body));
    }

    let body = response.text().await.map_err(|e| {
        error!("{} - Failed to read response body: {}", endpoint, e);
        ForecastError::Network(e.to_string())
    })?;

    serde_json::from_str(&body).map_err(|e| {
        error!("{} - Failed to parse response: {}", endpoint, e);
        ForecastError::Decode(e.to_string())
    })
}
