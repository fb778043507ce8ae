use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
}

/// Shown by every view until the first prediction lands in the store.
#[function_component(EmptyState)]
pub fn empty_state(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center gap-4">
                <p>{&props.message}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Generate Prediction"}
                </Link<Route>>
            </div>
        </div>
    }
}
