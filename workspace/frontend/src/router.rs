use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::forecast::Forecast;
use crate::components::home::Home;
use crate::components::resources::Resources;
use crate::store::PredictionHandle;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/forecast")]
    Forecast,
    #[at("/resources")]
    Resources,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Predict Hospital Load",
            Route::Forecast => "Forecast",
            Route::Resources => "Resource Plan",
            Route::NotFound => "404",
        }
    }
}

/// Every view reads the same store handle; switching routes never re-fetches.
pub fn switch(routes: Route, store: PredictionHandle) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Home {store} /> }
        }
        Route::Forecast => {
            log::trace!("Rendering Forecast page");
            html! { <Forecast {store} /> }
        }
        Route::Resources => {
            log::trace!("Rendering Resources page");
            html! { <Resources {store} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <h1>{"404 Not Found"}</h1> }
        }
    }
}
