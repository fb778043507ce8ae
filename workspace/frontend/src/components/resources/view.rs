use common::views::{resource_plan_view, ViewState};
use yew::prelude::*;

use super::tables::{CountGrid, ItemList, SupplyTable};
use crate::components::cards::EmptyState;
use crate::store::PredictionHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: PredictionHandle,
}

#[function_component(Resources)]
pub fn resources(props: &Props) -> Html {
    let plan = match ViewState::derive(props.store.store(), resource_plan_view) {
        ViewState::Populated(plan) => plan,
        ViewState::Empty => return html! { <EmptyState message="No resource plan yet." /> },
    };

    html! {
        <div class="grid grid-cols-1 gap-6">
            <CountGrid title="Staff Requirements" rows={plan.staff} />
            <CountGrid title="Bed & ICU Allocation" rows={plan.beds} />
            if !plan.supplies.is_empty() {
                <SupplyTable title="Supply Estimates" rows={plan.supplies} />
            }
            <ItemList title="Supplies Checklist" rows={plan.checklist} />
            <section class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Shift Recommendations"}</h3>
                    <ItemList rows={plan.shift_plan} />
                    <h4 class="font-semibold mt-4">{"Notes"}</h4>
                    <ItemList rows={plan.notes} />
                </div>
            </section>
        </div>
    }
}
