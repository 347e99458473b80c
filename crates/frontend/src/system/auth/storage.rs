use contracts::system::session::{evaluate_gate, GateError, Realm, Session};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected key {}", key);
        }
    }
}

/// Remove every key owned by `realm`
pub fn clear_realm(realm: Realm) {
    if let Some(storage) = get_local_storage() {
        for key in realm.storage_keys() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Run the gate over what is currently stored for `realm`
pub fn load_session(realm: Realm) -> Result<Session, GateError> {
    let token = realm.token_key().and_then(get_item);
    let blob = get_item(realm.data_key());
    evaluate_gate(realm, token.as_deref(), blob.as_deref())
}
