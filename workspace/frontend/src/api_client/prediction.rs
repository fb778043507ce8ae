use common::{ForecastError, HealthStatus, PredictionRecord, PredictionRequest, HEALTH_PATH, PREDICT_PATH};
use crate::api_client;

pub async fn request_prediction(request: &PredictionRequest) -> Result<PredictionRecord, ForecastError> {
    log::trace!("Requesting prediction for {} on {}", request.city, request.date);

    let result = api_client::post::<PredictionRecord, _>(PREDICT_PATH, request).await;

    match &result {
        Ok(record) => log::info!("Received prediction for {} on {}", record.city, record.date),
        Err(e) => log::error!("Failed to fetch prediction: {}", e),
    }

    result
}

pub async fn check_health() -> Result<HealthStatus, ForecastError> {
    api_client::get::<HealthStatus>(HEALTH_PATH).await
}
