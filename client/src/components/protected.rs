//! Route guard wrapper for views that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through this component, so the redirect
//! rule lives in one place (`util::auth::guard`). The decision is memoized:
//! the wrapped view is rebuilt only when the outcome changes, not on every
//! session write.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::spinner::Spinner;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardOutcome, guard};

/// Render `children` for a signed-in user, otherwise redirect to `/login`.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let outcome = Memo::new(move |_| session.with(guard));

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Pending => view! {
            <div class="route-pending">
                <Spinner/>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
