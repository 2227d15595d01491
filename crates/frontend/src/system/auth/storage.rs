use contracts::session::AdminSession;
use web_sys::window;

const SESSION_KEY: &str = "admin_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session so a reload keeps it.
pub fn save_session(session: &AdminSession) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

/// Restore the session from localStorage, if one was saved.
pub fn load_session() -> Option<AdminSession> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the persisted session.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
