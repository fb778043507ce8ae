use yew::prelude::*;
use super::latest::LatestPrediction;
use super::predict_form::PredictForm;
use crate::store::PredictionHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: PredictionHandle,
}

#[function_component(Home)]
pub fn home(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 gap-6">
            <PredictForm store={props.store.clone()} />
            <LatestPrediction store={props.store.clone()} />
        </div>
    }
}
