pub mod sidebar;

pub use sidebar::{MenuGroup, MenuItem, Sidebar};

use crate::layout::global_context::use_layout;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_layout();
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="left app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
