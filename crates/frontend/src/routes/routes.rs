use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::SiteLayout;
use crate::pages::admin::AdminPage;
use crate::pages::browse::BrowsePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::system::auth::guard::RequireSession;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteLayout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=BrowsePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/admin")
                        view=|| {
                            view! {
                                <RequireSession>
                                    <AdminPage />
                                </RequireSession>
                            }
                        }
                    />
                </Routes>
            </SiteLayout>
        </Router>
    }
}
