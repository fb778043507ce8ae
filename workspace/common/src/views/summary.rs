use super::metrics::MetricCard;
use crate::prediction::PredictionRecord;

/// "Latest Prediction" card on the request page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestSummary {
    pub city: String,
    pub date: String,
    pub summary: String,
    pub cards: [MetricCard; 4],
}

pub fn latest_summary(record: &PredictionRecord) -> Option<LatestSummary> {
    let forecast = record.prediction.as_ref()?;
    let loads = &forecast.loads;
    let card = |title: &'static str, value: String| MetricCard {
        title,
        value,
        description: String::new(),
    };

    Some(LatestSummary {
        city: record.city.clone(),
        date: record.date.clone(),
        summary: record.summary.clone(),
        cards: [
            card("OPD", format!("{} pts", loads.opd)),
            card("Emergency", format!("{} pts", loads.emergency)),
            card("ICU", format!("{} beds", loads.icu)),
            card("Risk Level", forecast.risk_label().to_string()),
        ],
    })
}
