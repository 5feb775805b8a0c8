use leptos::prelude::*;

/// Indeterminate loading indicator.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="progressbar" aria-busy="true" aria-label="Loading"></div> }
}
