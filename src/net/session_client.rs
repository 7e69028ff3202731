//! Network round trips for identity verification, login and registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session manager talks to this module. It owns a dedicated
//! `ApiConfig` and never goes through `net::api`, so a rejected identity check
//! can only ever surface as a typed error to the manager and never trigger the
//! general transport's handling of auth failures.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with a network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

use async_trait::async_trait;

use super::types::{LoginResponse, RegisterRequest, UserIdentity};
use crate::config::ApiConfig;
use crate::error::{LoginError, RegisterError, VerifyError};

pub const ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// The three auth endpoints the session manager depends on.
///
/// Futures are not `Send`: the browser runs them on its single event loop.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Check `token` against `GET /auth/me`.
    async fn verify(&self, token: &str) -> Result<UserIdentity, VerifyError>;

    /// Exchange credentials for a token and identity.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, LoginError>;

    /// Create an account. Does not sign in.
    async fn register(&self, request: &RegisterRequest) -> Result<(), RegisterError>;
}

/// `SessionApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSessionClient {
    config: ApiConfig,
}

impl HttpSessionClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "csr"))]
/// Map a non-success `/auth/me` status to its error.
pub(crate) fn classify_verify_status(status: u16) -> VerifyError {
    match status {
        401 => VerifyError::Unauthorized,
        403 => VerifyError::Forbidden,
        other => VerifyError::Network(format!("identity endpoint returned {other}")),
    }
}

#[cfg(any(test, feature = "csr"))]
/// Map a non-success `/auth/login` status (and body message) to its error.
pub(crate) fn classify_login_status(status: u16, message: Option<String>) -> LoginError {
    if (400..500).contains(&status) {
        LoginError::InvalidCredentials(message.unwrap_or_else(|| "email or password is incorrect".to_owned()))
    } else {
        LoginError::Network(format!("login endpoint returned {status}"))
    }
}

#[cfg(any(test, feature = "csr"))]
/// Map a non-success `/auth/register` status (and body message) to its error.
pub(crate) fn classify_register_status(status: u16, message: Option<String>) -> RegisterError {
    if (400..500).contains(&status) {
        RegisterError::Validation(message.unwrap_or_else(|| format!("registration rejected ({status})")))
    } else {
        RegisterError::Network(format!("register endpoint returned {status}"))
    }
}

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

#[async_trait(?Send)]
impl SessionApi for HttpSessionClient {
    async fn verify(&self, token: &str) -> Result<UserIdentity, VerifyError> {
        #[cfg(feature = "csr")]
        {
            use super::http::{bearer_header, is_success, send_with_timeout, with_default_headers};

            let builder = gloo_net::http::Request::get(&self.config.url(ME_PATH));
            let request = with_default_headers(builder, &self.config)
                .header("Authorization", &bearer_header(token))
                .build()
                .map_err(|e| VerifyError::Network(e.to_string()))?;
            let resp = send_with_timeout(request, self.config.timeout_ms())
                .await
                .map_err(VerifyError::Network)?;
            if !is_success(resp.status()) {
                return Err(classify_verify_status(resp.status()));
            }
            resp.json::<UserIdentity>()
                .await
                .map_err(|e| VerifyError::Network(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(VerifyError::Network(UNAVAILABLE.to_owned()))
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, LoginError> {
        #[cfg(feature = "csr")]
        {
            use super::http::{is_success, send_with_timeout, server_message, with_default_headers};
            use super::types::LoginRequest;

            let builder = gloo_net::http::Request::post(&self.config.url(LOGIN_PATH));
            let request = with_default_headers(builder, &self.config)
                .json(&LoginRequest { email, password })
                .map_err(|e| LoginError::Network(e.to_string()))?;
            let resp = send_with_timeout(request, self.config.timeout_ms())
                .await
                .map_err(LoginError::Network)?;
            if !is_success(resp.status()) {
                let status = resp.status();
                let message = match resp.text().await {
                    Ok(body) => server_message(&body),
                    Err(_) => None,
                };
                return Err(classify_login_status(status, message));
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| LoginError::Network(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(LoginError::Network(UNAVAILABLE.to_owned()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), RegisterError> {
        #[cfg(feature = "csr")]
        {
            use super::http::{is_success, send_with_timeout, server_message, with_default_headers};

            let builder = gloo_net::http::Request::post(&self.config.url(REGISTER_PATH));
            let prepared = with_default_headers(builder, &self.config)
                .json(request)
                .map_err(|e| RegisterError::Network(e.to_string()))?;
            let resp = send_with_timeout(prepared, self.config.timeout_ms())
                .await
                .map_err(RegisterError::Network)?;
            if !is_success(resp.status()) {
                let status = resp.status();
                let message = match resp.text().await {
                    Ok(body) => server_message(&body),
                    Err(_) => None,
                };
                return Err(classify_register_status(status, message));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(RegisterError::Network(UNAVAILABLE.to_owned()))
        }
    }
}
