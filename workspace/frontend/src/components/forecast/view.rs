use common::views::{forecast_view, ViewState};
use yew::prelude::*;

use super::chart::SurgeChart;
use super::stats::ForecastStats;
use super::tags::TagList;
use crate::components::cards::EmptyState;
use crate::store::PredictionHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: PredictionHandle,
}

#[function_component(Forecast)]
pub fn forecast(props: &Props) -> Html {
    let view = match ViewState::derive(props.store.store(), forecast_view) {
        ViewState::Populated(view) => view,
        ViewState::Empty => return html! { <EmptyState message="No prediction data yet." /> },
    };

    html! {
        <div class="grid grid-cols-1 gap-6">
            <ForecastStats metrics={view.metrics} />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Surge Projection"}</h3>
                    <SurgeChart points={view.loads} />
                </div>
            </div>
            <TagList title="Expected Patient Mix" tags={view.patient_mix} />
            if !view.recommendations.is_empty() {
                <TagList title="Recommendations" tags={view.recommendations} />
            }
        </div>
    }
}
