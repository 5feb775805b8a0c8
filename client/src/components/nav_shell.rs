//! Persistent layout chrome around every protected page.
//!
//! ARCHITECTURE
//! ============
//! Header with the sidebar toggle, tenant/user identity and logout; a
//! collapsible sidebar with the route menu; and the routed page in `<main>`.
//! Sidebar state is local to the shell (`state::ui::UiState`).

#[cfg(test)]
#[path = "nav_shell_test.rs"]
mod nav_shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::viewport::viewport_width;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Clients,
    Invoices,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar menu, in display order. Identical for every session.
pub const MENU_ITEMS: &[NavItem] = &[
    NavItem { icon: NavIcon::Dashboard, label: "Dashboard", path: "/dashboard" },
    NavItem { icon: NavIcon::Clients, label: "Clients", path: "/clients" },
    NavItem { icon: NavIcon::Invoices, label: "Invoices", path: "/invoices" },
];

/// Menu items highlight on exact path equality only.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

/// Layout shell wrapping a protected page.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let ui = RwSignal::new(UiState::default());
    let pathname = use_location().pathname;

    // Viewport width is only known in the browser.
    Effect::new(move || ui.set(UiState::for_viewport(viewport_width())));

    let user_name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let org_name = move || session.with(|s| s.organization().map(|o| o.name.clone()).unwrap_or_default());

    // The enclosing route guard redirects to the login page.
    let on_logout = move |_| {
        session.update(SessionStore::logout);
        log::info!("signed out");
    };

    let menu = MENU_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            let active = move || is_active(item.path, &pathname.get());
            view! {
                <a
                    href=item.path
                    class="nav-item"
                    class:nav-item--active=active
                    aria-current=move || active().then_some("page")
                    on:click=move |_| ui.update(UiState::on_navigate)
                >
                    {render_icon(item.icon)}
                    <span class="nav-item__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-shell" class:app-shell--sidebar-open=move || ui.get().sidebar_open>
            <header class="app-shell__header">
                <button
                    class="btn app-shell__menu-toggle"
                    title="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    "☰"
                </button>
                <span class="app-shell__org">{org_name}</span>
                <span class="app-shell__spacer"></span>
                <span class="app-shell__user">{user_name}</span>
                <button class="btn app-shell__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <Show when=move || ui.get().backdrop_visible()>
                <div class="sidebar-backdrop" on:click=move |_| ui.update(UiState::on_backdrop_click)></div>
            </Show>

            <aside
                class="sidebar"
                class:sidebar--open=move || ui.get().sidebar_open
                class:sidebar--overlay=move || ui.get().narrow_viewport
            >
                <div class="sidebar__header">
                    <span class="sidebar__brand">"Ledgerly"</span>
                    <button
                        class="btn sidebar__close"
                        title="Close navigation"
                        on:click=move |_| ui.update(UiState::close_sidebar)
                    >
                        "×"
                    </button>
                </div>
                <nav class="sidebar__menu">{menu}</nav>
            </aside>

            <main class="app-shell__content">{children()}</main>
        </div>
    }
}

fn render_icon(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Dashboard => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="2" width="7" height="9" />
                <rect x="11" y="2" width="7" height="5" />
                <rect x="2" y="13" width="7" height="5" />
                <rect x="11" y="9" width="7" height="9" />
            </svg>
        }
        .into_any(),
        NavIcon::Clients => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7" r="3" />
                <path d="M2 17 C2 13.5 4.5 12 7 12 C9.5 12 12 13.5 12 17" />
                <circle cx="14" cy="6" r="2.5" />
                <path d="M13 11.2 C15.5 11 18 12.3 18 16" />
            </svg>
        }
        .into_any(),
        NavIcon::Invoices => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 2 H13 L16 5 V18 H4 Z" />
                <line x1="7" y1="8" x2="13" y2="8" />
                <line x1="7" y1="11" x2="13" y2="11" />
                <line x1="7" y1="14" x2="11" y2="14" />
            </svg>
        }
        .into_any(),
    }
}
