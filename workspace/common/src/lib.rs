//! Shared prediction types, state and derivations.
//! Both the browser dashboard and the command-line client build on these so
//! the two surfaces decode, store and project a prediction identically.

mod error;
mod form;
mod prediction;
mod request;
mod store;
pub mod views;

pub use error::{ForecastError, GENERIC_FAILURE, classify_rejection};
pub use form::{RequestForm, Settlement, settle_response};
pub use prediction::{
    CountTable, DiseaseSection, FestivalSection, ImpactFactor, LoadForecast, Loads, NO_FESTIVAL,
    Operations, PollutionSection, PredictionRecord, Requirements, ResourcePlan, SupplyEstimate,
    UNKNOWN_LABEL,
};
pub use request::{
    City, DEFAULT_API_BASE, HEALTH_PATH, PREDICT_PATH, PredictionRequest, endpoint_url,
    resolve_api_base,
};
pub use store::{PredictionStore, RequestSequence, RequestTicket, Resolution};

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
