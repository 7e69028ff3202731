//! Request plumbing shared by the session client and the general API client.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// `Authorization` header value for a bearer token.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the server's human-readable `message` from an error body, if any.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn server_message(body: &str) -> Option<String> {
    use super::types::ErrorBody;

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) if !message.trim().is_empty() => Some(message),
        _ => None,
    }
}

/// 2xx, the only statuses whose body is decoded as a success payload.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn timed_out_message(timeout_ms: u32) -> String {
    format!("request timed out after {timeout_ms}ms")
}

/// Apply the transport's default headers to a request builder.
#[cfg(feature = "csr")]
pub(crate) fn with_default_headers(
    mut builder: gloo_net::http::RequestBuilder,
    config: &crate::config::ApiConfig,
) -> gloo_net::http::RequestBuilder {
    for (name, value) in &config.headers {
        builder = builder.header(name, value);
    }
    builder
}

/// Send a prepared request, failing with a message if it outlives the timeout.
#[cfg(feature = "csr")]
pub(crate) async fn send_with_timeout(
    request: gloo_net::http::Request,
    timeout_ms: u32,
) -> Result<gloo_net::http::Response, String> {
    use futures::future::{Either, select};

    let send = Box::pin(request.send());
    let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(|e| e.to_string()),
        Either::Right(((), _)) => Err(timed_out_message(timeout_ms)),
    }
}
