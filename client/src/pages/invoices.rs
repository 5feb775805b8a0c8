//! Invoices route. Invoice management lives in the backend; this page only
//! anchors the route inside the shell.

use leptos::prelude::*;

#[component]
pub fn InvoicesPage() -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h1 class="page-title">"Invoices"</h1>
        </div>
    }
}
