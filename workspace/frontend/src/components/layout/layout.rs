use yew::prelude::*;

use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::hooks::use_backend_health;

/// Checkbox that opens the sidebar on narrow screens.
const DRAWER_ID: &str = "surge-drawer";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Dashboard shell: sidebar navigation plus a navbar carrying the backend status.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let backend = use_backend_health();

    html! {
        <div class="drawer lg:drawer-open">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Navbar drawer_id={DRAWER_ID} {backend} />
                <main class="flex-1 p-6 max-w-6xl w-full mx-auto">
                    { for props.children.iter() }
                </main>
                <footer class="footer footer-center p-4 text-xs text-base-content/60">
                    {"Forecasts are advisory; confirm staffing changes with hospital operations."}
                </footer>
            </div>
            <Sidebar drawer_id={DRAWER_ID} />
        </div>
    }
}
