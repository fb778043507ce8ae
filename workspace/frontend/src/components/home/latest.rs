use common::views::{latest_summary, ViewState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::MetricCard;
use crate::store::PredictionHandle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: PredictionHandle,
}

#[function_component(LatestPrediction)]
pub fn latest_prediction(props: &Props) -> Html {
    let summary = match ViewState::derive(props.store.store(), latest_summary) {
        ViewState::Populated(summary) => summary,
        ViewState::Empty => return html! {},
    };

    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Latest Prediction"}</h2>
                <p class="text-sm text-gray-500">{format!("{} · {}", summary.city, summary.date)}</p>
                <p>{&summary.summary}</p>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    { for summary.cards.iter().map(|card| html! {
                        <MetricCard key={card.title} title={card.title} value={card.value.clone()} />
                    }) }
                </div>
                <div class="card-actions justify-end mt-4">
                    <Link<Route> to={Route::Forecast} classes="btn btn-primary">{"View Forecast"}</Link<Route>>
                    <Link<Route> to={Route::Resources} classes="btn btn-secondary">{"Resource Plan"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}
