use contracts::system::session::Realm;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::storage;
use crate::shared::message::use_messages;

/// Renders `children` only for a valid stored session of `realm`, with the
/// `Session` in context. Anything else redirects to the realm's login page;
/// unreadable or rejected sessions are wiped first.
#[component]
pub fn RequireSession(realm: Realm, children: ChildrenFn) -> impl IntoView {
    match storage::load_session(realm) {
        Ok(session) => {
            log::debug!("{} session for {}", realm.display_name(), session.user_id);
            provide_context(session);
            children().into_any()
        }
        Err(e) => {
            if e.clears_storage() {
                log::warn!("{} session refused: {}", realm.display_name(), e);
                storage::clear_realm(realm);
                use_messages().error(e.to_string());
            }
            view! { <Redirect path=realm.login_path() /> }.into_any()
        }
    }
}
