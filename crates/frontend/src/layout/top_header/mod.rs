//! Top bar of a dashboard: sidebar toggle, title, signed-in user and logout.

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::shared::message::use_messages;
use crate::system::auth::api::logout;
use crate::system::auth::context::use_session;
use contracts::system::session::Realm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader(realm: Realm, #[prop(into)] title: String) -> impl IntoView {
    let ctx = use_layout();
    let messages = use_messages();
    let navigate = use_navigate();

    let user_name = use_session()
        .map(|s| s.name)
        .unwrap_or_else(|| realm.display_name().to_string());

    let on_logout = move |_| {
        logout(realm);
        messages.success("Logged out successfully");
        navigate(realm.login_path(), Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if ctx.left_open.get() {
                        icon("chevron-left")
                    } else {
                        icon("chevron-right")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_name}</span>
                    <span class="top-header__realm">{realm.display_name()}</span>
                </div>
                <button class="top-header__icon-btn" on:click=on_logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
