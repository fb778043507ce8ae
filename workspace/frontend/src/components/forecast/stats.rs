use common::views::HeadlineMetrics;
use yew::prelude::*;

use crate::components::cards::MetricCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: HeadlineMetrics,
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            { for props.metrics.cards().into_iter().map(|card| html! {
                <MetricCard
                    key={card.title}
                    title={card.title}
                    value={card.value.clone()}
                    description={card.description.clone()}
                />
            }) }
        </div>
    }
}
