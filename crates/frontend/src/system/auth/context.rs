use chrono::Utc;
use contracts::session::AdminSession;
use leptos::prelude::*;

use super::{storage, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Session context provider.
///
/// Restores a persisted session on mount (dropping it if it has expired) and
/// hands the signal pair to the whole tree, so protected views read the
/// session from context instead of poking localStorage themselves.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let restored = storage::load_session().filter(|session| session.is_active(Utc::now()));
    if restored.is_none() {
        // Either nothing was saved or it expired; both mean logged out.
        storage::clear_session();
    }

    let (session, set_session) = signal(restored);
    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state.
pub fn use_session() -> (
    ReadSignal<Option<AdminSession>>,
    WriteSignal<Option<AdminSession>>,
) {
    let session = use_context::<ReadSignal<Option<AdminSession>>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<Option<AdminSession>>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Check credentials and open a session. Plain string comparison against the
/// compiled-in constants — no remote call is involved.
pub fn login(username: &str, password: &str) -> Result<AdminSession, String> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        let session = AdminSession::start(Utc::now());
        storage::save_session(&session);
        Ok(session)
    } else {
        Err("Invalid username or password".to_string())
    }
}

/// Close the session and drop the persisted copy.
pub fn logout(set_session: WriteSignal<Option<AdminSession>>) {
    storage::clear_session();
    set_session.set(None);
}
