//! Clients route. Client management lives in the backend; this page only
//! anchors the route inside the shell.

use leptos::prelude::*;

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1 class="page-title">"Clients"</h1>
        </div>
    }
}
