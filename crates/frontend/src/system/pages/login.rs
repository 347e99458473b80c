use contracts::system::session::Realm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::api_client::{log_api_error, use_api_client};
use crate::shared::message::use_messages;
use crate::system::auth::api;

/// Email/password login form of one realm
#[component]
pub fn LoginPage(realm: Realm) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let client = use_api_client();
    let messages = use_messages();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".into()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(client, realm, email_val, password_val).await {
                Ok(session) => {
                    log::info!("{} login: {}", realm.display_name(), session.user_id);
                    messages.success(format!("Welcome, {}", session.name));
                    set_is_loading.set(false);
                    navigate(realm.home_path(), Default::default());
                }
                Err(e) => {
                    log_api_error("login", &e);
                    set_error_message.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Marketplace"</h1>
                <h2>{format!("{} login", realm.display_name())}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
