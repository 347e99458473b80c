use contracts::system::session::Realm;
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::icons::icon;
use crate::shared::message::use_messages;
use crate::system::auth::api::logout;
use crate::system::auth::storage;

/// Public pages: store header with customer links, the page, a footer
#[component]
pub fn StoreLayout() -> impl IntoView {
    let location = use_location();
    let messages = use_messages();
    let navigate = use_navigate();

    // Re-read storage on navigation so login/logout show up in the header
    let customer = Signal::derive(move || {
        location.pathname.track();
        storage::load_session(Realm::Customer).ok().map(|s| s.name)
    });

    let on_logout = move |_| {
        logout(Realm::Customer);
        messages.success("Logged out successfully");
        navigate("/", Default::default());
    };

    view! {
        <div class="store-layout">
            <header class="store-header">
                <A href="/" attr:class="store-header__brand">"Marketplace"</A>
                <nav class="store-header__nav">
                    <A href="/" exact=true>"Home"</A>
                    <A href="/products">"Products"</A>
                    {move || match customer.get() {
                        Some(name) => view! {
                            <A href="/orders">"My orders"</A>
                            <span class="store-header__user">{icon("users")}{name}</span>
                            <button class="button button--icon" title="Logout" on:click=on_logout.clone()>
                                {icon("logout")}
                            </button>
                        }
                        .into_any(),
                        None => view! {
                            <A href="/login">"Sign in"</A>
                            <A href="/login/vendor" attr:class="store-header__muted">"Sell with us"</A>
                        }
                        .into_any(),
                    }}
                </nav>
            </header>
            <main class="store-main">
                <Outlet />
            </main>
            <footer class="store-footer">
                <A href="/login/admin">"Admin"</A>
            </footer>
        </div>
    }
}
