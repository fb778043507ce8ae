#[cfg(test)]
pub mod test_utils {
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use common::PredictionRequest;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// City whose stub response is delayed, for out-of-order tests
    pub const SLOW_CITY: &str = "Kolkata";

    /// Serve `app` on an ephemeral local port and return its base URL
    pub async fn spawn_backend(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let address = listener.local_addr().expect("Stub backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend crashed");
        });

        format!("http://{}", address)
    }

    /// Prediction payload in the shape the coordinator emits: the raw `data`
    /// bundle, a no-festival day, `null` placeholders among the pollution
    /// recommendations and the impact factors repeated under `prediction.drivers`.
    pub fn sample_prediction(city: &str, date: &str) -> Value {
        let pollution = json!({
            "opd_surge_percent": 25.0,
            "icu_surge_percent": 10.0,
            "emergency_surge_percent": 15.0,
            "severity_score": 0.36,
            "risk_level": "Unhealthy",
            "expected_patient_types": [
                "Respiratory distress",
                "Asthma exacerbation",
                "COPD complications",
                "Bronchitis",
                "Pneumonia risk"
            ],
            "recommendations": [
                "Increase respiratory medicine stock",
                "Prepare additional nebulizers",
                null,
                null
            ]
        });
        let festival = json!({
            "opd_surge_percent": 0,
            "emergency_surge_percent": 0,
            "icu_surge_percent": 0,
            "severity_score": 0,
            "festival_name": null,
            "expected_patient_types": [],
            "recommendations": []
        });
        let disease = json!({
            "opd_surge_percent": 18.0,
            "emergency_surge_percent": 9.0,
            "icu_surge_percent": 4.5,
            "severity_score": 0.45,
            "dengue_risk": 0.1,
            "viral_fever_risk": 0.6,
            "h1n1_risk": 0.5,
            "season": "Winter",
            "expected_patient_types": ["Influenza", "Viral fever"],
            "recommendations": ["Stock antiviral medication"]
        });

        json!({
            "city": city,
            "date": date,
            "data": {
                "city": city,
                "date": date,
                "pollution": {"aqi": 180, "pm25": 110, "pm10": 150, "source": "synthetic"},
                "weather": {"temperature": 24, "humidity": 60, "source": "synthetic"},
                "festivals": [],
                "health": {"dengue_cases": 12, "flu_cases": 40},
                "timestamp": format!("{}T09:30:00", date)
            },
            "pollution": {"pollution_impact": pollution.clone()},
            "festival": {"festival_impact": festival.clone()},
            "disease": {"disease_impact": disease.clone()},
            "prediction": {
                "city": city,
                "date": date,
                "loads": {"opd": 120, "emergency": 30, "icu": 5, "ventilator": 5, "pharmacy": 144},
                "risk_level": "High",
                "combined_severity": 0.27,
                "drivers": {
                    "pollution": pollution,
                    "festival": festival,
                    "disease": disease
                },
                "confidence": 0.82,
                "generated_at": format!("{}T09:30:01Z", date)
            },
            "operations": {"resource_plan": {
                "requirements": {
                    "staff": {"doctors": 11, "nurses": 23, "paramedics": 5, "pharmacists": 2},
                    "beds": {"general": 20, "emergency": 10, "icu": 5, "ventilator": 5},
                    "supplies": {
                        "oxygen_cylinders": 25,
                        "medications": "Normal",
                        "ppe_kits": 50,
                        "blood_units": 5
                    }
                },
                "shift_plan": ["Maintain standard staffing with light on-call support."],
                "checklist": [
                    "Verify oxygen cylinder availability",
                    "Check ventilator functionality",
                    "Audit critical drug inventory",
                    "Coordinate ambulance readiness"
                ],
                "notes": [
                    "Review plan with hospital operations team.",
                    "Maintain coordination with municipal health authorities."
                ]
            }},
            "summary": format!(
                "For {}, expected OPD load is 120 patients and emergency load 30 patients. \
                 Overall risk level is High.",
                city
            ),
            "generated_at": format!("{}T09:30:02Z", date)
        })
    }

    async fn predict(Json(request): Json<PredictionRequest>) -> Response {
        let date = request.date.to_string();
        match request.city.as_str() {
            "Atlantis" => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": "invalid city"})),
            )
                .into_response(),
            "Nowhere" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
            "Garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
            city => {
                if city == SLOW_CITY {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                }
                Json(sample_prediction(city, &date)).into_response()
            }
        }
    }

    async fn health() -> Json<Value> {
        Json(json!({"status": "ok"}))
    }

    /// Stub of the forecasting service's HTTP surface
    pub fn stub_router() -> Router {
        Router::new()
            .route("/predict", post(predict))
            .route("/health", get(health))
    }

    /// Start the stub backend and return its base URL
    pub async fn setup_stub_backend() -> String {
        spawn_backend(stub_router()).await
    }
}
