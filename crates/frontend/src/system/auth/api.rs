use contracts::shared::envelope::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::session::{login_entries, Realm, Session};

use super::storage;
use crate::shared::api_client::ApiClient;

/// Log into `realm`, store the session and run it through the gate.
///
/// An account the gate refuses (e.g. a vendor still pending approval) is
/// removed from storage again and reported as an application error.
pub async fn login(
    client: ApiClient,
    realm: Realm,
    email: String,
    password: String,
) -> Result<Session, ApiError> {
    let request = LoginRequest { email, password };
    let response: LoginResponse = client.post(realm.login_endpoint(), &request).await?;

    for (key, value) in login_entries(realm, response.token.as_deref(), response.user) {
        storage::set_item(key, &value);
    }

    storage::load_session(realm).map_err(|e| {
        storage::clear_realm(realm);
        ApiError::Application(e.to_string())
    })
}

pub fn logout(realm: Realm) {
    storage::clear_realm(realm);
    log::info!("{} logged out", realm.display_name());
}
