//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        let state = auth.get();
        match state.user {
            Some(user) if state.is_authenticated => view! {
                <p class="home-page__greeting">"Welcome back, " {user.display_name()} "."</p>
                <a class="home-page__cta" href="/account">"Go to your account"</a>
            }
            .into_any(),
            _ if state.is_loading => ().into_any(),
            _ => view! {
                <p class="home-page__greeting">"Borrow, read and return, all in one place."</p>
                <a class="home-page__cta" href="/login">"Sign in"</a>
                <a class="home-page__cta home-page__cta--secondary" href="/register">"Create an account"</a>
            }
            .into_any(),
        }
    };

    view! {
        <section class="home-page">
            <h1>"Read with Love"</h1>
            {greeting}
        </section>
    }
}
