//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{navbar::Navbar, protected_route::ProtectedRoute};
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::session_client::HttpSessionClient;
use crate::pages::{
    account::AccountPage, admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::BrowserSession;
use crate::util::route_guard::{LANDING_PATH, RouteAccess};
use crate::util::token_store::{BrowserStorage, TokenStore};

/// Root application component.
///
/// Owns the one `AuthSession` for the page load and mirrors its state into a
/// signal so components re-render on every session transition.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let session = BrowserSession::new(HttpSessionClient::new(config.clone()), TokenStore::new(BrowserStorage));
    let api = ApiClient::new(config, TokenStore::new(BrowserStorage));

    let auth = RwSignal::new(session.state());
    session.subscribe(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context(session.clone());
    provide_context(api);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });

    view! {
        <Title text="Read with Love"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("account")
                        view=|| view! { <ProtectedRoute><AccountPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute access=RouteAccess::Admin><AdminPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
