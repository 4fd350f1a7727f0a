//! Session State
//!
//! In-memory user profile backed by localStorage, provided via a
//! reactive_stores Store at the app root. Two keys persist across reloads:
//! the bearer token and the serialized profile, always cleared together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Profile of the signed-in user, None when signed out
    pub user: Option<User>,
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Build the initial session from persisted storage.
pub fn init_session() -> Session {
    let user = stored_value(USER_KEY).and_then(|raw| decode_stored_user(&raw));
    Session { user }
}

/// Decode a persisted profile, tolerating malformed data.
pub fn decode_stored_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Persisted bearer token, if any. Presence is the whole auth check
/// client-side; validity is the server's problem.
pub fn stored_token() -> Option<String> {
    stored_value(TOKEN_KEY)
}

// ========================
// Store Helper Functions
// ========================

/// Current profile out of the store
pub fn current_user(store: &SessionStore) -> Option<User> {
    store.user().get()
}

/// Persist token + profile and update the in-memory session.
pub fn save_auth(store: &SessionStore, user: User, token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(&user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
    *store.user().write() = Some(user);
}

/// Drop persisted and in-memory session state together.
pub fn clear_auth(store: &SessionStore) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    *store.user().write() = None;
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn stored_value(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_stored_user_accepts_valid_profile() {
        let user = decode_stored_user(
            r#"{"id":1,"fullname":"Siti","username":"siti","email":"siti@toko.id","role":"admin"}"#,
        );
        assert_eq!(user.map(|u| u.fullname), Some("Siti".to_string()));
    }

    #[test]
    fn decode_stored_user_tolerates_garbage() {
        assert_eq!(decode_stored_user("not json at all"), None);
        assert_eq!(decode_stored_user("{\"id\":"), None);
        assert_eq!(decode_stored_user("null"), None);
    }
}
