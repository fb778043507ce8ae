use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod router;
pub mod settings;
pub mod store;

use components::layout::layout::Layout;
pub use router::Route;
use store::StoreState;

/// Composition root: owns the prediction store and passes it to every view.
#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(StoreState::default);

    let render = {
        let store = store.clone();
        Callback::from(move |route: Route| router::switch(route, store.clone()))
    };

    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={render} />
            </Layout>
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Hospital Surge Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
