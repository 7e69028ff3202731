use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn server_message_reads_message_field() {
    assert_eq!(
        server_message(r#"{"status":401,"message":"Bad credentials"}"#),
        Some("Bad credentials".to_owned())
    );
}

#[test]
fn server_message_ignores_blank_missing_and_non_json() {
    assert_eq!(server_message(r#"{"message":"  "}"#), None);
    assert_eq!(server_message(r#"{"error":"nope"}"#), None);
    assert_eq!(server_message("<html>502</html>"), None);
    assert_eq!(server_message(""), None);
}

#[test]
fn timed_out_message_includes_duration() {
    assert_eq!(timed_out_message(10_000), "request timed out after 10000ms");
}

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(304));
    assert!(!is_success(401));
}
