use crate::prediction::PredictionRecord;

/// One named point of the load chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPoint {
    pub label: &'static str,
    pub value: u32,
}

/// OPD, Emergency and ICU load, always in that order.
pub fn load_series(record: &PredictionRecord) -> Option<Vec<LoadPoint>> {
    let loads = &record.prediction.as_ref()?.loads;
    Some(vec![
        LoadPoint { label: "OPD", value: loads.opd },
        LoadPoint { label: "Emergency", value: loads.emergency },
        LoadPoint { label: "ICU", value: loads.icu },
    ])
}
