//! Top navigation bar reflecting the current session.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::BrowserSession;

/// Navigation links plus sign-in/sign-up or the signed-in user and logout.
///
/// The admin link is shown only to authenticated administrators; the route
/// itself is still guarded.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<BrowserSession>();

    // Nothing until verification settles, so the bar never flashes "Sign in".
    let session_controls = move || {
        let state = auth.get();
        if state.is_loading {
            return ().into_any();
        }
        if !state.is_authenticated {
            return view! {
                <a class="navbar__button" href="/login">"Sign in"</a>
                <a class="navbar__button" href="/register">"Sign up"</a>
            }
            .into_any();
        }
        let name = state.user.map(|u| u.display_name()).unwrap_or_default();
        let session = session.clone();
        view! {
            <span class="navbar__user">{name}</span>
            <button class="navbar__button" on:click=move |_| session.logout()>"Logout"</button>
        }
        .into_any()
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Read with Love"</span>
            <ul class="navbar__links">
                <li><a class="navbar__link" href="/home">"Home"</a></li>
                <Show when=move || auth.get().is_authenticated>
                    <li><a class="navbar__link" href="/account">"Account"</a></li>
                </Show>
                <Show when=move || auth.get().is_admin()>
                    <li><a class="navbar__link" href="/admin">"Admin"</a></li>
                </Show>
            </ul>
            <div class="navbar__session">{session_controls}</div>
        </nav>
    }
}
