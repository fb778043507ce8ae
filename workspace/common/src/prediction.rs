//! Prediction record as returned by `POST /predict`.
//!
//! Every section is optional at decode time. The backend is allowed to drop
//! whole sections and the derivation views fall back to documented defaults
//! instead of refusing the record.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Shown when an impact factor carries no risk label.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Shown when the festival factor names no festival.
pub const NO_FESTIVAL: &str = "No major festival";

/// Role or bed type mapped to a count, in the order the server sent them.
pub type CountTable = IndexMap<String, u32>;

/// The aggregated forecast for one city/date query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default)]
    pub pollution: Option<PollutionSection>,
    #[serde(default)]
    pub festival: Option<FestivalSection>,
    #[serde(default)]
    pub disease: Option<DiseaseSection>,
    #[serde(default)]
    pub prediction: Option<LoadForecast>,
    #[serde(default)]
    pub operations: Option<Operations>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionSection {
    #[serde(default)]
    pub pollution_impact: Option<ImpactFactor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalSection {
    #[serde(default)]
    pub festival_impact: Option<ImpactFactor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSection {
    #[serde(default)]
    pub disease_impact: Option<ImpactFactor>,
}

/// One sub-model's contribution to the surge forecast.
///
/// `festival_name` and `days_away` only appear on the festival factor,
/// `season` and the two disease risks only on the disease factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity_score: f64,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub expected_patient_types: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub opd_surge_percent: Option<f64>,
    #[serde(default)]
    pub emergency_surge_percent: Option<f64>,
    #[serde(default)]
    pub icu_surge_percent: Option<f64>,
    #[serde(default)]
    pub festival_name: Option<String>,
    #[serde(default)]
    pub days_away: Option<i64>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub dengue_risk: Option<f64>,
    #[serde(default)]
    pub viral_fever_risk: Option<f64>,
}

impl ImpactFactor {
    pub fn risk_label(&self) -> &str {
        non_blank(self.risk_level.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn festival_label(&self) -> &str {
        non_blank(self.festival_name.as_deref()).unwrap_or(NO_FESTIVAL)
    }

    pub fn season_label(&self) -> &str {
        non_blank(self.season.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }
}

/// The `prediction` section: overall risk and projected loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadForecast {
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(default)]
    pub combined_severity: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loads: Loads,
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl LoadForecast {
    pub fn risk_label(&self) -> &str {
        non_blank(self.risk_level.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loads {
    #[serde(default, deserialize_with = "null_as_default")]
    pub opd: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emergency: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icu: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ventilator: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pharmacy: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operations {
    #[serde(default)]
    pub resource_plan: Option<ResourcePlan>,
}

/// Staffing, bed, supply and shift recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Requirements,
    #[serde(default, deserialize_with = "string_list")]
    pub checklist: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub shift_plan: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default, deserialize_with = "null_as_default")]
    pub staff: CountTable,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beds: CountTable,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supplies: IndexMap<String, SupplyEstimate>,
}

/// A supply line is either counted or graded ("High", "Normal").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupplyEstimate {
    Count(u32),
    Level(String),
}

impl fmt::Display for SupplyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyEstimate::Count(n) => write!(f, "{}", n),
            SupplyEstimate::Level(level) => f.write_str(level),
        }
    }
}

impl PredictionRecord {
    pub fn pollution_impact(&self) -> Option<&ImpactFactor> {
        self.pollution.as_ref()?.pollution_impact.as_ref()
    }

    pub fn festival_impact(&self) -> Option<&ImpactFactor> {
        self.festival.as_ref()?.festival_impact.as_ref()
    }

    pub fn disease_impact(&self) -> Option<&ImpactFactor> {
        self.disease.as_ref()?.disease_impact.as_ref()
    }

    pub fn resource_plan(&self) -> Option<&ResourcePlan> {
        self.operations.as_ref()?.resource_plan.as_ref()
    }

    /// Impact factors in merge order: pollution, festival, disease.
    pub fn impact_factors(&self) -> [Option<&ImpactFactor>; 3] {
        [
            self.pollution_impact(),
            self.festival_impact(),
            self.disease_impact(),
        ]
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Explicit `null` decodes like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// String list that may itself be `null` or hold `null` entries, which are dropped.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_payload() {
        let body = json!({
            "city": "Mumbai",
            "date": "2024-01-01",
            "summary": "For Mumbai, expected OPD load is 120 patients.",
            "pollution": {"pollution_impact": {
                "severity_score": 0.42,
                "risk_level": "Moderate",
                "expected_patient_types": ["Asthma", "COPD"],
                "opd_surge_percent": 12.5
            }},
            "festival": {"festival_impact": {
                "severity_score": 0,
                "festival_name": null,
                "expected_patient_types": []
            }},
            "disease": {"disease_impact": {
                "severity_score": 0.3,
                "season": "Winter",
                "expected_patient_types": ["Influenza"]
            }},
            "prediction": {
                "risk_level": "High",
                "confidence": 0.82,
                "combined_severity": 0.29,
                "loads": {"opd": 120, "emergency": 30, "icu": 5, "ventilator": 5, "pharmacy": 144}
            },
            "operations": {"resource_plan": {
                "requirements": {
                    "staff": {"nurses": 4, "doctors": 2},
                    "beds": {"general": 20},
                    "supplies": {"oxygen_cylinders": 25, "medications": "Normal"}
                },
                "checklist": ["Verify oxygen cylinder availability"],
                "shift_plan": ["Maintain standard staffing with light on-call support."],
                "notes": ["Review plan with hospital operations team."]
            }},
            "data": {"ignored": true},
            "generated_at": "2024-01-01T00:00:00Z"
        });

        let record: PredictionRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.city, "Mumbai");
        assert_eq!(record.pollution_impact().unwrap().risk_label(), "Moderate");
        assert_eq!(record.festival_impact().unwrap().festival_label(), NO_FESTIVAL);
        assert_eq!(record.disease_impact().unwrap().season_label(), "Winter");

        let forecast = record.prediction.as_ref().unwrap();
        assert_eq!(forecast.loads.opd, 120);
        assert_eq!(forecast.loads.pharmacy, 144);

        let plan = record.resource_plan().unwrap();
        let roles: Vec<&str> = plan.requirements.staff.keys().map(String::as_str).collect();
        assert_eq!(roles, vec!["nurses", "doctors"]);
        assert_eq!(
            plan.requirements.supplies.get("medications"),
            Some(&SupplyEstimate::Level("Normal".to_string()))
        );
        assert_eq!(
            plan.requirements.supplies.get("oxygen_cylinders").map(|s| s.to_string()),
            Some("25".to_string())
        );
    }

    #[test]
    fn test_decode_sparse_payload() {
        let record: PredictionRecord =
            serde_json::from_value(json!({"summary": "partial"})).unwrap();
        assert_eq!(record.summary, "partial");
        assert!(record.prediction.is_none());
        assert!(record.resource_plan().is_none());
        assert_eq!(record.impact_factors(), [None, None, None]);
    }

    #[test]
    fn test_missing_loads_default_to_zero() {
        let record: PredictionRecord = serde_json::from_value(json!({
            "prediction": {"risk_level": "Low", "confidence": 0.5, "loads": {"opd": 10}}
        }))
        .unwrap();
        let loads = record.prediction.unwrap().loads;
        assert_eq!(loads.opd, 10);
        assert_eq!(loads.emergency, 0);
        assert_eq!(loads.icu, 0);
    }

    #[test]
    fn test_blank_labels_use_fallbacks() {
        let factor = ImpactFactor {
            risk_level: Some("  ".to_string()),
            festival_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(factor.risk_label(), UNKNOWN_LABEL);
        assert_eq!(factor.festival_label(), NO_FESTIVAL);
        assert_eq!(factor.season_label(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_null_entries_in_lists_are_dropped() {
        let factor: ImpactFactor = serde_json::from_value(json!({
            "severity_score": 0.36,
            "risk_level": "Moderate",
            "expected_patient_types": ["Respiratory distress", "Asthma exacerbation"],
            "recommendations": [
                "Increase respiratory medicine stock",
                "Prepare additional nebulizers",
                null,
                null
            ]
        }))
        .unwrap();
        assert_eq!(
            factor.recommendations,
            vec!["Increase respiratory medicine stock", "Prepare additional nebulizers"]
        );
        assert_eq!(factor.expected_patient_types.len(), 2);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let record: PredictionRecord = serde_json::from_value(json!({
            "summary": null,
            "festival": {"festival_impact": {
                "severity_score": null,
                "festival_name": null,
                "expected_patient_types": null,
                "recommendations": null
            }},
            "prediction": {
                "risk_level": null,
                "confidence": null,
                "loads": {"opd": 300, "emergency": null, "icu": 40}
            },
            "operations": {"resource_plan": {
                "requirements": {"staff": null, "beds": {"icu": 40}},
                "checklist": ["Verify oxygen cylinder availability", null],
                "shift_plan": null,
                "notes": null
            }}
        }))
        .unwrap();

        assert_eq!(record.summary, "");
        let festival = record.festival_impact().unwrap();
        assert_eq!(festival.severity_score, 0.0);
        assert!(festival.expected_patient_types.is_empty());
        assert_eq!(festival.festival_label(), NO_FESTIVAL);

        let forecast = record.prediction.as_ref().unwrap();
        assert_eq!(forecast.confidence, 0.0);
        assert_eq!(forecast.risk_label(), UNKNOWN_LABEL);
        assert_eq!(forecast.loads.opd, 300);
        assert_eq!(forecast.loads.emergency, 0);

        let plan = record.resource_plan().unwrap();
        assert!(plan.requirements.staff.is_empty());
        assert_eq!(plan.requirements.beds["icu"], 40);
        assert_eq!(plan.checklist, vec!["Verify oxygen cylinder availability"]);
        assert!(plan.shift_plan.is_empty());
        assert!(plan.notes.is_empty());
    }
}
