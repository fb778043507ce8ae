//! Request side of the `/predict` contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/health";

/// Cities the forecasting backend has baselines for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[default]
    Mumbai,
    Delhi,
    Bangalore,
    Kolkata,
    Chennai,
    Hyderabad,
    Pune,
}

impl City {
    /// Display order of the city picker.
    pub const ALL: [City; 7] = [
        City::Mumbai,
        City::Delhi,
        City::Bangalore,
        City::Kolkata,
        City::Chennai,
        City::Hyderabad,
        City::Pune,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bangalore => "Bangalore",
            City::Kolkata => "Kolkata",
            City::Chennai => "Chennai",
            City::Hyderabad => "Hyderabad",
            City::Pune => "Pune",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown city: {}", s))
    }
}

/// JSON body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub city: String,
    pub date: NaiveDate,
}

impl PredictionRequest {
    pub fn new(city: City, date: NaiveDate) -> Self {
        Self {
            city: city.as_str().to_string(),
            date,
        }
    }
}

/// Resolve the backend base URL from an optional override.
///
/// Blank overrides fall back to [`DEFAULT_API_BASE`]; trailing slashes are
/// trimmed so endpoint paths can be appended directly.
pub fn resolve_api_base(override_url: Option<&str>) -> String {
    let base = override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_string()
}

pub fn endpoint_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = PredictionRequest::new(
            City::Mumbai,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"city": "Mumbai", "date": "2024-01-01"}));
    }

    #[test]
    fn test_city_parsing() {
        assert_eq!("pune".parse::<City>(), Ok(City::Pune));
        assert_eq!(" Delhi ".parse::<City>(), Ok(City::Delhi));
        assert!("Atlantis".parse::<City>().is_err());
        assert_eq!(City::default(), City::Mumbai);
        assert_eq!(City::ALL[0], City::Mumbai);
        assert_eq!(City::ALL[6], City::Pune);
    }

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(Some("   ")), DEFAULT_API_BASE);
        assert_eq!(
            resolve_api_base(Some("https://surge.example.org/")),
            "https://surge.example.org"
        );
        assert_eq!(
            endpoint_url(&resolve_api_base(Some("http://10.0.0.2:9000")), PREDICT_PATH),
            "http://10.0.0.2:9000/predict"
        );
    }
}
