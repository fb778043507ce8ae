//! Derivation views: pure projections of the stored prediction record.
//!
//! Each view is either `Empty` (nothing stored yet, or the section it needs
//! is missing) or `Populated` with its projection. Views never mutate the
//! record they read from.

mod loads;
mod metrics;
mod patients;
mod resources;
mod summary;

pub use loads::{LoadPoint, load_series};
pub use metrics::{HeadlineMetrics, MetricCard, headline_metrics, percent, percent_value};
pub use patients::{Tag, merge_tags, patient_mix, recommendations};
pub use resources::{CountRow, ListRow, ResourcePlanView, SupplyRow, resource_plan_view};
pub use summary::{LatestSummary, latest_summary};

use crate::prediction::PredictionRecord;
use crate::store::PredictionStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Empty,
    Populated(T),
}

impl<T> ViewState<T> {
    pub fn from_record<F>(record: Option<&PredictionRecord>, project: F) -> Self
    where
        F: FnOnce(&PredictionRecord) -> Option<T>,
    {
        match record.and_then(project) {
            Some(view) => ViewState::Populated(view),
            None => ViewState::Empty,
        }
    }

    pub fn derive<F>(store: &PredictionStore, project: F) -> Self
    where
        F: FnOnce(&PredictionRecord) -> Option<T>,
    {
        Self::from_record(store.get().map(|record| record.as_ref()), project)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            ViewState::Populated(view) => Some(view),
            ViewState::Empty => None,
        }
    }
}

/// Everything the forecast breakdown page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub metrics: HeadlineMetrics,
    pub loads: Vec<LoadPoint>,
    pub patient_mix: Vec<Tag>,
    pub recommendations: Vec<Tag>,
}

pub fn forecast_view(record: &PredictionRecord) -> Option<ForecastView> {
    Some(ForecastView {
        metrics: headline_metrics(record)?,
        loads: load_series(record)?,
        patient_mix: patient_mix(record),
        recommendations: recommendations(record),
    })
}
