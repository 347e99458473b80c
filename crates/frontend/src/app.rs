use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::message::MessageCenter;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("api origin: {}", config.api_origin);

    // One message slot for the whole application
    provide_context(MessageCenter::new(config.message_ttl_ms));
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
