use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_session) = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        // Plain string comparison; no remote call is involved.
        match login(&username.get(), &password.get()) {
            Ok(session) => {
                set_session.set(Some(session));
                navigate("/admin", Default::default());
            }
            Err(message) => set_error_message.set(Some(message)),
        }
    };

    view! {
        <div class="login">
            <div class="login__box">
                <h1 class="login__title">"Admin Login"</h1>
                <p class="login__subtitle">"Please enter your credentials to continue"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="login__error">{move || error_message.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="button button--primary login__submit">
                        "Login to Dashboard"
                    </button>
                </form>
            </div>
        </div>
    }
}
