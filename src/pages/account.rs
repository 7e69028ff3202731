//! Account page for the signed-in user: identity, current loans and a manual
//! session refresh.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use super::UNREACHABLE_MESSAGE;
use crate::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use crate::error::VerifyError;
use crate::net::api::ApiClient;
use crate::net::types::UserIdentity;
use crate::state::auth::AuthState;
use crate::state::session::BrowserSession;
use crate::util::token_store::BrowserStorage;

#[cfg(any(test, feature = "csr"))]
pub(crate) fn refresh_message(outcome: &Result<UserIdentity, VerifyError>) -> String {
    match outcome {
        Ok(_) => "Profile is up to date.".to_owned(),
        Err(e) if e.is_rejection() => "Your session has ended. Sign in again.".to_owned(),
        Err(_) => UNREACHABLE_MESSAGE.to_owned(),
    }
}

/// Text for the loans line. `None` while the count is still loading.
pub(crate) fn loans_label(loans: Option<&Result<u32, ApiError>>) -> String {
    match loans {
        None => "Checking your loans...".to_owned(),
        Some(Ok(0)) => "No books on loan.".to_owned(),
        Some(Ok(1)) => "1 book on loan.".to_owned(),
        Some(Ok(count)) => format!("{count} books on loan."),
        Some(Err(_)) => "Loan count unavailable.".to_owned(),
    }
}

/// Whether a failed loans request means the credential was rejected and the
/// session should be re-verified.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn needs_session_recheck(loans: &Result<u32, ApiError>) -> bool {
    matches!(loans, Err(e) if e.is_auth_rejection())
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<BrowserSession>();
    let api = expect_context::<ApiClient<BrowserStorage>>();

    let loans = RwSignal::new(None::<Result<u32, ApiError>>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let count = api.current_loans_count().await;
            let recheck = needs_session_recheck(&count);
            loans.set(Some(count));
            // The session manager decides whether the token is really dead.
            if recheck {
                if let Err(e) = session.refresh().await {
                    leptos::logging::log!("account: session recheck failed: {e}");
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    drop(api);

    let logout_session = session.clone();
    let on_logout = move |_| logout_session.logout();

    let on_refresh = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Refreshing...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = session.refresh().await;
                info.set(refresh_message(&outcome));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &session;
        }
    };

    let field = move |pick: fn(&UserIdentity) -> String| {
        move || auth.with(|state| state.user.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <section class="account-page">
            <h1>"Your account"</h1>
            <dl class="account-page__identity">
                <dt>"Name"</dt>
                <dd>{field(UserIdentity::display_name)}</dd>
                <dt>"Email"</dt>
                <dd>{field(|user| user.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|user| if user.is_admin() { "Administrator".to_owned() } else { "Reader".to_owned() })}</dd>
            </dl>
            <p class="account-page__loans">{move || loans.with(|loans| loans_label(loans.as_ref()))}</p>
            <div class="account-page__actions">
                <button class="account-page__button" on:click=on_refresh disabled=move || busy.get()>
                    "Refresh"
                </button>
                <button class="account-page__button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="account-page__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
