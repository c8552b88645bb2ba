mod common;

use axum::http::{Method, StatusCode};
use common::{generate_unique_email, setup_test_app};
use serde_json::json;
use skripsi::skripsi_core::{Role, verify_password};
use skripsi::store::UserStore;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid identifier or password";

#[tokio::test]
async fn test_register_then_login_scenario() {
    let app = setup_test_app();

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "A",
                "username": "a1",
                "email": "a@x.com",
                "password": "p"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["message"].is_string());
    let user_id: Uuid = response.body["userID"].as_str().unwrap().parse().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "a@x.com", "password": "p" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let claims = app.tokens.verify(token).unwrap();
    assert_eq!(claims.user_id, user_id);
    assert_eq!(claims.peran, Role::Student);
}

#[tokio::test]
async fn test_login_with_username() {
    let app = setup_test_app();
    let email = generate_unique_email();

    app.request(
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "nama_lengkap": "Budi",
            "username": "budi01",
            "email": email,
            "password": "secret"
        })),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "budi01", "password": "secret" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = setup_test_app();
    let user = app.create_user(Role::Student).await;

    let wrong_password = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": user.email, "password": "wrong" })),
        )
        .await;
    let unknown_user = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "nobody@test.com", "password": "wrong" })),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.body["message"], INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let app = setup_test_app();
    let email = generate_unique_email();

    app.request(
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "nama_lengkap": "Citra",
            "email": email,
            "password": "plaintext"
        })),
    )
    .await;

    let hash = app.store.password_hash_for(&email).await.unwrap();
    assert_ne!(hash, "plaintext");
    assert!(verify_password("plaintext", &hash).unwrap());
}

#[tokio::test]
async fn test_register_ignores_role_in_body() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "Dewi",
                "email": email,
                "password": "p",
                "peran": "superadmin"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let (user, _) = app.store.get_user_by_identifier(&email).await.unwrap();
    assert_eq!(user.peran, Role::Student);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let first = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "nama_lengkap": "A", "username": "first", "email": email, "password": "p" })),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "nama_lengkap": "B", "username": "second", "email": email, "password": "p" })),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Email already registered");
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = setup_test_app();

    app.request(
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "nama_lengkap": "A",
            "username": "taken",
            "email": generate_unique_email(),
            "password": "p"
        })),
    )
    .await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "B",
                "username": "taken",
                "email": generate_unique_email(),
                "password": "p"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Username already taken");
}

#[tokio::test]
async fn test_distinct_users_both_register() {
    let app = setup_test_app();

    for username in ["one1", "two2"] {
        let response = app
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "nama_lengkap": "A",
                    "username": username,
                    "email": generate_unique_email(),
                    "password": "p"
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_blank_username_is_absent() {
    let app = setup_test_app();

    for _ in 0..2 {
        let response = app
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "nama_lengkap": "A",
                    "username": "   ",
                    "email": generate_unique_email(),
                    "password": "p"
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = setup_test_app();

    let missing_email = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "nama_lengkap": "A", "password": "p" })),
        )
        .await;
    assert_eq!(missing_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_email.body["message"], "email is required");

    let bad_email = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "nama_lengkap": "A", "email": "not-an-email", "password": "p" })),
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["message"], "email must be a valid email address");

    let empty_password = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "nama_lengkap": "A", "email": generate_unique_email(), "password": "" })),
        )
        .await;
    assert_eq!(empty_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_password.body["message"], "password is required");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = setup_test_app();

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "a@x.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "password is required");
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let app = setup_test_app();
    app.store.set_unavailable(true);

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "a@x.com", "password": "p" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");
}

#[tokio::test]
async fn test_username_cannot_shadow_an_email() {
    let app = setup_test_app();

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "Mallory",
                "username": "victim@x.com",
                "email": "mallory@x.com",
                "password": "mpass"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "username must not contain '@'");

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "Victim",
                "email": "victim@x.com",
                "password": "vpass"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "victim@x.com", "password": "vpass" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn test_email_login_wins_over_a_matching_username() {
    let app = setup_test_app();

    // Written straight to the store, bypassing request validation
    app.store
        .create_user(
            skripsi::skripsi_models::NewUser {
                nama_lengkap: "Mallory".to_string(),
                username: Some("victim@x.com".to_string()),
                email: "mallory@x.com".to_string(),
                password: "mpass".to_string(),
            },
            Role::Student,
        )
        .await
        .unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "nama_lengkap": "Victim",
                "email": "victim@x.com",
                "password": "vpass"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let victim_id: Uuid = response.body["userID"].as_str().unwrap().parse().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "identifier": "victim@x.com", "password": "vpass" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let claims = app.tokens.verify(response.body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user_id, victim_id);
}
