//! General-purpose REST transport for library endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with a network error.
//!
//! ERROR HANDLING
//! ==============
//! The stored token is attached to every request, but a 401/403 here is only
//! logged and returned. Clearing the token or redirecting is the session
//! manager's job alone; doing it here too would race its own sign-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::util::token_store::{StorageBackend, TokenStore};

pub const CURRENT_LOANS_COUNT_PATH: &str = "/books/secure/currentloans/count";

/// REST client that reads the bearer token from the shared slot per request.
#[derive(Debug, Clone)]
pub struct ApiClient<B> {
    config: ApiConfig,
    store: TokenStore<B>,
}

impl<B: StorageBackend> ApiClient<B> {
    pub fn new(config: ApiConfig, store: TokenStore<B>) -> Self {
        Self { config, store }
    }

    /// `Authorization` header value for a request to `path`, if a token is stored.
    #[cfg(any(test, feature = "csr"))]
    pub(crate) fn authorization(&self, path: &str) -> Option<String> {
        use super::http::bearer_header;

        let header = self.store.get().map(|token| bearer_header(&token));
        if header.is_none() && is_secure_path(path) {
            log::warn!("no token stored for secure request {path}");
        }
        header
    }

    /// `GET` a JSON body from `path`.
    ///
    /// # Errors
    ///
    /// Returns `Status` for non-success responses, `Network` for transport
    /// failures and `Decode` for unexpected bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::http::{is_success, send_with_timeout, with_default_headers};

            let mut builder = with_default_headers(gloo_net::http::Request::get(&self.config.url(path)), &self.config);
            if let Some(value) = self.authorization(path) {
                builder = builder.header("Authorization", &value);
            }
            let request = builder.build().map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = send_with_timeout(request, self.config.timeout_ms())
                .await
                .map_err(ApiError::Network)?;
            if !is_success(resp.status()) {
                return Err(status_error(path, resp.status()));
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, &self.config, &self.store);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// Number of books the signed-in user currently has on loan.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn current_loans_count(&self) -> Result<u32, ApiError> {
        self.get_json(CURRENT_LOANS_COUNT_PATH).await
    }
}

/// Whether `path` targets an endpoint that requires a signed-in user.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn is_secure_path(path: &str) -> bool {
    path.contains("/secure/")
}

/// Error for a non-success response. Credential rejections are logged and
/// returned like any other status.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn status_error(path: &str, status: u16) -> ApiError {
    if matches!(status, 401 | 403) {
        log::warn!("{path}: credential rejected with {status}; session state left to the session manager");
    } else {
        log::warn!("{path}: request failed with {status}");
    }
    ApiError::Status { path: path.to_owned(), status }
}
