use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let config = ApiConfig::from_values(None, None);
    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(
        config.headers,
        vec![("Content-Type".to_owned(), "application/json".to_owned())]
    );
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = ApiConfig::from_values(Some("https://library.example.com/api/"), None);
    assert_eq!(config.base_url, "https://library.example.com/api");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = ApiConfig::from_values(Some("   "), None);
    assert_eq!(config.base_url, DEFAULT_API_BASE);
}

#[test]
fn timeout_parses_milliseconds() {
    let config = ApiConfig::from_values(None, Some("2500"));
    assert_eq!(config.timeout, Duration::from_millis(2500));
    assert_eq!(config.timeout_ms(), 2500);
}

#[test]
fn invalid_or_zero_timeout_falls_back_to_default() {
    assert_eq!(ApiConfig::from_values(None, Some("soon")).timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    assert_eq!(ApiConfig::from_values(None, Some("0")).timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
}

#[test]
fn url_joins_base_and_path_with_single_slash() {
    let config = ApiConfig::from_values(Some("http://api.test/api/"), None);
    assert_eq!(config.url("/auth/me"), "http://api.test/api/auth/me");
    assert_eq!(config.url("auth/login"), "http://api.test/api/auth/login");
}

#[test]
fn timeout_ms_saturates() {
    let config = ApiConfig { timeout: Duration::from_secs(u64::MAX / 2_000), ..ApiConfig::default() };
    assert_eq!(config.timeout_ms(), u32::MAX);
}
