use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation chrome shared by every route.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <header class="site__header">
                <A href="/" attr:class="site__brand">
                    "FAQ Hub"
                </A>
                <nav class="site__nav">
                    <A href="/" attr:class="site__nav-link">
                        "FAQ"
                    </A>
                    <A href="/admin" attr:class="site__nav-link">
                        "Admin"
                    </A>
                </nav>
            </header>
            <main class="site__content">{children()}</main>
            <footer class="site__footer">
                <span>"FAQ Hub — frequently asked questions, managed in one place"</span>
            </footer>
        </div>
    }
}
