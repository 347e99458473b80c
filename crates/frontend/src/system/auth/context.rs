use contracts::system::session::Session;
use leptos::prelude::*;

/// Session provided by the nearest `RequireSession`
pub fn use_session() -> Option<Session> {
    use_context::<Session>()
}
