use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Content area of a dashboard; renders the matched child route
#[component]
pub fn Center() -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            <Outlet />
        </div>
    }
}
