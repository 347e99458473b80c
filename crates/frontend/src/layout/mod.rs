pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use contracts::system::session::Realm;
use global_context::AppGlobalContext;
use left::{MenuGroup, Sidebar};
use leptos::prelude::*;
use top_header::TopHeader;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Content (child route)     |
/// +------------------------------------------+
/// ```
///
/// Must be rendered inside `RequireSession` so the header can show the user.
#[component]
pub fn Shell(realm: Realm, #[prop(into)] title: String, menu: Vec<MenuGroup>) -> impl IntoView {
    provide_context(AppGlobalContext::new(MenuGroup::group_ids(&menu)));

    view! {
        <div class="app-layout">
            <TopHeader realm=realm title=title />
            <div class="app-body">
                <left::Left>
                    <Sidebar groups=menu />
                </left::Left>
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
