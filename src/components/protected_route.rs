//! Route wrapper applying the guard policy to its children.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::spinner::SpinnerLoading;
use crate::state::auth::AuthState;
use crate::util::route_guard::{GuardDecision, RouteAccess, evaluate};

/// Render `children` only when the session satisfies `access`.
///
/// Re-evaluates whenever the session signal changes, so signing out on a
/// protected page redirects immediately.
#[component]
pub fn ProtectedRoute(#[prop(optional)] access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match evaluate(access, &auth.get()) {
        GuardDecision::Loading => view! { <SpinnerLoading/> }.into_any(),
        GuardDecision::Redirect(path) => {
            leptos::logging::log!("route guard: redirecting to {path}");
            view! { <Redirect path=path/> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
