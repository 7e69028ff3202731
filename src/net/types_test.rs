use super::*;

#[test]
fn user_identity_deserializes_camel_case() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "email": "ada@library.test",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "role": "ADMIN"
    }))
    .unwrap();
    assert_eq!(user.email, "ada@library.test");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert!(user.is_admin());
}

#[test]
fn unknown_or_missing_role_is_user() {
    let unknown: UserIdentity = serde_json::from_value(serde_json::json!({
        "email": "a@b.com", "firstName": "A", "lastName": "B", "role": "LIBRARIAN"
    }))
    .unwrap();
    assert_eq!(unknown.role, Role::User);

    let missing: UserIdentity = serde_json::from_value(serde_json::json!({
        "email": "a@b.com", "firstName": "A", "lastName": "B"
    }))
    .unwrap();
    assert_eq!(missing.role, Role::User);
}

#[test]
fn login_response_flattens_identity() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "aaa.bbb.ccc",
        "email": "a@b.com",
        "firstName": "A",
        "lastName": "B",
        "role": "USER"
    }))
    .unwrap();
    assert_eq!(resp.token, "aaa.bbb.ccc");
    assert_eq!(resp.user.email, "a@b.com");
    assert_eq!(resp.user.role, Role::User);
}

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw", "firstName": "A", "lastName": "B" })
    );
}

#[test]
fn display_name_falls_back_to_email() {
    let mut user = UserIdentity {
        email: "a@b.com".to_owned(),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        role: Role::User,
    };
    assert_eq!(user.display_name(), "Grace Hopper");
    user.first_name.clear();
    user.last_name = "  ".to_owned();
    assert_eq!(user.display_name(), "a@b.com");
}
