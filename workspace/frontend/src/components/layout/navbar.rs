use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::BackendStatus;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub drawer_id: AttrValue,
    pub backend: BackendStatus,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <header class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
            <label for={props.drawer_id.clone()} aria-label="open sidebar" class="btn btn-square btn-ghost lg:hidden">
                <i class="fas fa-bars text-xl"></i>
            </label>
            <h1 class="flex-1 px-4 text-xl font-bold">{ route.title() }</h1>
            <span class={classes!("badge", "mr-4", props.backend.badge_class())}>
                { props.backend.label() }
            </span>
        </header>
    }
}
