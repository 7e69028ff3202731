//! Library management landing page. Reachable only by administrators.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in_as = move || auth.with(|state| state.user.as_ref().map(|user| user.email.clone()).unwrap_or_default());

    view! {
        <section class="admin-page">
            <h1>"Manage library"</h1>
            <p class="admin-page__identity">"Signed in as " {signed_in_as} " (administrator)."</p>
        </section>
    }
}
