use super::*;

#[test]
fn verify_status_401_is_unauthorized() {
    assert_eq!(classify_verify_status(401), VerifyError::Unauthorized);
}

#[test]
fn verify_status_403_is_forbidden() {
    assert_eq!(classify_verify_status(403), VerifyError::Forbidden);
}

#[test]
fn verify_other_statuses_are_network_errors() {
    for status in [400, 404, 429, 500, 502, 503] {
        assert!(
            matches!(classify_verify_status(status), VerifyError::Network(_)),
            "status {status} should be transient"
        );
    }
}

#[test]
fn login_4xx_is_invalid_credentials_with_server_message() {
    assert_eq!(
        classify_login_status(401, Some("Bad credentials".to_owned())),
        LoginError::InvalidCredentials("Bad credentials".to_owned())
    );
    assert!(matches!(classify_login_status(400, None), LoginError::InvalidCredentials(_)));
    assert!(matches!(classify_login_status(404, None), LoginError::InvalidCredentials(_)));
}

#[test]
fn login_5xx_is_network_error() {
    assert_eq!(
        classify_login_status(503, Some("down".to_owned())),
        LoginError::Network("login endpoint returned 503".to_owned())
    );
}

#[test]
fn register_4xx_is_validation_error() {
    assert_eq!(
        classify_register_status(409, Some("Email already registered".to_owned())),
        RegisterError::Validation("Email already registered".to_owned())
    );
    assert_eq!(
        classify_register_status(400, None),
        RegisterError::Validation("registration rejected (400)".to_owned())
    );
}

#[test]
fn register_5xx_is_network_error() {
    assert!(matches!(classify_register_status(500, None), RegisterError::Network(_)));
}

#[test]
fn endpoint_paths_resolve_against_config_base() {
    let client = HttpSessionClient::new(ApiConfig::from_values(Some("http://api.test/api"), None));
    assert_eq!(client.config().url(ME_PATH), "http://api.test/api/auth/me");
    assert_eq!(client.config().url(LOGIN_PATH), "http://api.test/api/auth/login");
    assert_eq!(client.config().url(REGISTER_PATH), "http://api.test/api/auth/register");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_network_errors() {
    let client = HttpSessionClient::new(ApiConfig::default());
    futures::executor::block_on(async {
        assert!(matches!(client.verify("t").await, Err(VerifyError::Network(_))));
        assert!(matches!(client.login("a@b.com", "pw").await, Err(LoginError::Network(_))));
        let request = RegisterRequest {
            email: "a@b.com".to_owned(),
            password: "pw".to_owned(),
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
        };
        assert!(matches!(client.register(&request).await, Err(RegisterError::Network(_))));
    });
}
