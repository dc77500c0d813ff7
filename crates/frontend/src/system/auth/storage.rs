use contracts::system::identity::UserProfile;

use crate::shared::storage;

/// Persisted session written by the identity provider.
pub const SESSION_KEY: &str = "cinetron-session";

/// Get the signed-in profile from localStorage
pub fn get_profile() -> Option<UserProfile> {
    storage::get_json(SESSION_KEY)
}

/// Clear the persisted session
pub fn clear_session() {
    storage::remove(SESSION_KEY);
}

/// Whether a `storage` event with this key can change the session.
/// `None` means the whole storage was cleared.
pub fn affects_session(key: Option<&str>) -> bool {
    match key {
        Some(key) => key == SESSION_KEY,
        None => true,
    }
}
