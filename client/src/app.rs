//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::nav_shell::AppShell;
use crate::components::protected::Protected;
use crate::pages::{clients::ClientsPage, dashboard::DashboardPage, invoices::InvoicesPage, login::LoginPage};
use crate::state::session::SessionStore;
use crate::util::auth::HOME_PATH;
use crate::util::session_repository::StorageSessionRepository;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let repository = Arc::new(StorageSessionRepository::new(BrowserStorage));
    let session = RwSignal::new(SessionStore::new(repository));
    provide_context(session);

    // Effects only run in the browser, where durable storage is readable.
    Effect::new(move || session.update(SessionStore::rehydrate));

    view! {
        <Stylesheet id="leptos" href="/pkg/ledgerly.css"/>
        <Title text="Ledgerly"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route path=StaticSegment("invoices") view=InvoicesPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded layout shared by every authenticated route.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <Protected>
            <AppShell>
                <Outlet/>
            </AppShell>
        </Protected>
    }
}
