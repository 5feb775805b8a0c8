//! Dashboard page with the four summary statistic cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it issues one
//! statistics request with the session's bearer token; a response arriving
//! after the page unmounts is dropped.

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::state::dashboard::{DashboardView, summary_cards};
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let view_state = RwSignal::new(DashboardView::Loading);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let session = expect_context::<RwSignal<SessionStore>>();
        let token = session.with_untracked(|s| s.access_token().map(str::to_owned));
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_dashboard_stats(token.as_deref()).await;
            if !alive_task.load(Ordering::Relaxed) {
                log::debug!("dashboard unmounted before stats arrived; dropping response");
                return;
            }
            view_state.set(DashboardView::settle(result));
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            {move || match view_state.get() {
                DashboardView::Loading => view! {
                    <div class="dashboard-page__loading">
                        <Spinner/>
                    </div>
                }
                .into_any(),
                DashboardView::Loaded(stats) => view! {
                    <div class="dashboard-page__cards">
                        {summary_cards(&stats)
                            .into_iter()
                            .map(|card| view! { <StatCard card=card/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
