use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Shown for every failure that carries no server message.
pub const GENERIC_FAILURE: &str = "Unable to fetch prediction";

/// Classified failure of a forecast request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// The request never reached the server or no response came back.
    #[error("network failure: {0}")]
    Network(String),
    /// Non-2xx response carrying a `detail` message.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    /// Non-2xx response without a usable `detail`.
    #[error("request rejected ({status})")]
    RejectedNoDetail { status: u16 },
    /// 2xx response whose body is not a prediction record.
    #[error("failed to decode prediction: {0}")]
    Decode(String),
}

impl ForecastError {
    /// Message for the request form's error slot.
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::Rejected { detail, .. } => detail.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Classify a non-2xx response from its status and raw body.
pub fn classify_rejection(status: u16, body: &str) -> ForecastError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(detail_message);

    match detail {
        Some(detail) => ForecastError::Rejected { status, detail },
        None => ForecastError::RejectedNoDetail { status },
    }
}

// FastAPI validation errors arrive as a list of {loc, msg, type} objects.
fn detail_message(detail: Value) -> Option<String> {
    match detail {
        Value::String(message) if !message.is_empty() => Some(message),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_verbatim() {
        let err = classify_rejection(422, r#"{"detail":"invalid city"}"#);
        assert_eq!(
            err,
            ForecastError::Rejected {
                status: 422,
                detail: "invalid city".to_string()
            }
        );
        assert_eq!(err.user_message(), "invalid city");
    }

    #[test]
    fn test_validation_list_detail() {
        let body = r#"{"detail":[
            {"loc":["body","date"],"msg":"date must be in YYYY-MM-DD format","type":"value_error"},
            {"loc":["body","city"],"msg":"field required","type":"missing"}
        ]}"#;
        let err = classify_rejection(422, body);
        assert_eq!(
            err.user_message(),
            "date must be in YYYY-MM-DD format; field required"
        );
    }

    #[test]
    fn test_missing_detail_uses_generic_message() {
        for body in ["", "not json", "{}", r#"{"detail":null}"#, r#"{"detail":42}"#] {
            let err = classify_rejection(500, body);
            assert_eq!(err, ForecastError::RejectedNoDetail { status: 500 });
            assert_eq!(err.user_message(), GENERIC_FAILURE);
        }
    }

    #[test]
    fn test_network_failure_has_no_server_message() {
        let err = ForecastError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert!(err.to_string().contains("connection refused"));
    }
}
