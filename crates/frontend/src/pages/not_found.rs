use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        log::error!(
            "404: attempted to access non-existent route: {}",
            location.pathname.get()
        );
    });

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__title">"Page Not Found"</p>
            <p class="not-found__hint">
                "The page you're looking for doesn't exist. Let's get you back on track."
            </p>
            <A href="/" attr:class="button button--primary">
                "Return to FAQs"
            </A>
        </div>
    }
}
