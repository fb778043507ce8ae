use crate::prediction::{ImpactFactor, PredictionRecord};

/// Title, headline value and caption of one dashboard card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineMetrics {
    pub pollution: MetricCard,
    pub festival: MetricCard,
    pub disease: MetricCard,
    pub overall: MetricCard,
    /// Aggregate confidence as a percentage string.
    pub confidence: String,
}

impl HeadlineMetrics {
    pub fn cards(&self) -> [&MetricCard; 4] {
        [&self.pollution, &self.festival, &self.disease, &self.overall]
    }
}

/// `round(fraction * 100)` with the fraction clamped into [0, 1].
pub fn percent_value(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn percent(fraction: f64) -> String {
    format!("{}%", percent_value(fraction))
}

/// Headline cards for the three impact factors and the aggregate.
///
/// A missing impact section renders as a zero-severity factor; a missing
/// `prediction` section means there is nothing to headline.
pub fn headline_metrics(record: &PredictionRecord) -> Option<HeadlineMetrics> {
    let forecast = record.prediction.as_ref()?;
    let fallback = ImpactFactor::default();
    let [pollution, festival, disease] = record
        .impact_factors()
        .map(|factor| factor.unwrap_or(&fallback));

    let confidence = percent(forecast.confidence);
    Some(HeadlineMetrics {
        pollution: MetricCard {
            title: "Pollution Severity",
            value: percent(pollution.severity_score),
            description: format!("Risk: {}", pollution.risk_label()),
        },
        festival: MetricCard {
            title: "Festival Impact",
            value: percent(festival.severity_score),
            description: festival.festival_label().to_string(),
        },
        disease: MetricCard {
            title: "Disease Severity",
            value: percent(disease.severity_score),
            description: format!("Season: {}", disease.season_label()),
        },
        overall: MetricCard {
            title: "Overall Risk",
            value: forecast.risk_label().to_string(),
            description: format!("Confidence {}", confidence),
        },
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{LoadForecast, PollutionSection};

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(0.5), "50%");
        assert_eq!(percent(0.999), "100%");
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(0.824), "82%");
    }

    #[test]
    fn test_percent_clamps_out_of_range() {
        assert_eq!(percent_value(-0.2), 0);
        assert_eq!(percent_value(1.7), 100);
        assert_eq!(percent_value(f64::NAN), 0);
    }

    #[test]
    fn test_headline_defaults() {
        let record = PredictionRecord {
            pollution: Some(PollutionSection {
                pollution_impact: Some(ImpactFactor {
                    severity_score: 0.5,
                    risk_level: Some("Poor".to_string()),
                    ..Default::default()
                }),
            }),
            prediction: Some(LoadForecast {
                risk_level: Some("High".to_string()),
                confidence: 0.82,
                ..Default::default()
            }),
            ..Default::default()
        };

        let metrics = headline_metrics(&record).unwrap();
        assert_eq!(metrics.pollution.value, "50%");
        assert_eq!(metrics.pollution.description, "Risk: Poor");
        assert_eq!(metrics.festival.value, "0%");
        assert_eq!(metrics.festival.description, "No major festival");
        assert_eq!(metrics.disease.description, "Season: Unknown");
        assert_eq!(metrics.overall.value, "High");
        assert_eq!(metrics.overall.description, "Confidence 82%");
        assert_eq!(metrics.confidence, "82%");
        assert_eq!(metrics.cards().len(), 4);
    }

    #[test]
    fn test_no_prediction_section() {
        assert!(headline_metrics(&PredictionRecord::default()).is_none());
    }
}
