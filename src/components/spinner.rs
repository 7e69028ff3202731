//! Loading placeholder.

use leptos::prelude::*;

/// Shown while a session verification is in flight.
#[component]
pub fn SpinnerLoading() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner__label">"Loading..."</span>
        </div>
    }
}
