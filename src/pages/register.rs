//! Registration page. Creating an account does not sign the user in; on
//! success the page points them at `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use super::UNREACHABLE_MESSAGE;
#[cfg(any(test, feature = "csr"))]
use crate::error::RegisterError;
use crate::net::types::RegisterRequest;
use crate::state::session::BrowserSession;

/// Build a registration request from raw form values. Names and email are
/// trimmed; the password is sent as typed.
pub(crate) fn validate_register_input(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if email.is_empty() || password.is_empty() || first_name.is_empty() || last_name.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    })
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn register_error_message(error: &RegisterError) -> String {
    match error {
        RegisterError::Validation(message) => message.clone(),
        RegisterError::Network(_) => UNREACHABLE_MESSAGE.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&email.get(), &password.get(), &first_name.get(), &last_name.get())
        {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.register(&request).await {
                    Ok(()) => {
                        password.set(String::new());
                        info.set(String::new());
                        registered.set(true);
                    }
                    Err(e) => info.set(register_error_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <Show
                    when=move || registered.get()
                    fallback=move || view! {
                        <form class="login-form" on:submit=on_submit.clone()>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="First name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Last name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Register"
                            </button>
                        </form>
                    }
                >
                    <p class="login-message">
                        "Account created. "
                        <a href="/login">"Sign in"</a>
                        " to continue."
                    </p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
