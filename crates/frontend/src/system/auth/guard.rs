use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Wrapper for views that require an active admin session.
/// Redirects to the login page otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || {
                session
                    .get()
                    .map(|session| session.is_active(Utc::now()))
                    .unwrap_or(false)
            }
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
