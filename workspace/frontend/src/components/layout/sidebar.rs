use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub drawer_id: AttrValue,
}

const PAGES: [(Route, &str, &str); 3] = [
    (Route::Home, "fas fa-stethoscope", "Predict"),
    (Route::Forecast, "fas fa-chart-line", "Forecast"),
    (Route::Resources, "fas fa-hospital", "Resources"),
];

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let current = use_route::<Route>();

    html! {
        <aside class="drawer-side z-50">
            <label for={props.drawer_id.clone()} aria-label="close sidebar" class="drawer-overlay"></label>
            <nav class="min-h-full w-72 bg-base-100 border-r border-base-300 p-4">
                <div class="px-2 mb-6">
                    <p class="text-2xl font-bold">{"Hospital Surge Predictor"}</p>
                    <p class="text-sm text-base-content/60">{"Pollution, festival and disease driven load forecasts"}</p>
                </div>
                <ul class="menu gap-1">
                    { for PAGES.iter().map(|(route, icon, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <li key={*label}>
                                <Link<Route> to={route.clone()} classes={classes!(active.then_some("active"))}>
                                    <i class={classes!(*icon, "w-5")}></i>
                                    { *label }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </aside>
    }
}
