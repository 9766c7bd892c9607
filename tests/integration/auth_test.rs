//! Integration tests for registration, login and session revocation.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_register_defaults_to_member_and_hides_hash() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let email = unique_email("member");

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "name": "Chidi",
                "email": email,
                "password": PASSWORD,
                "password_confirmation": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.str("/message"), "User registered successfully");
    assert_eq!(response.str("/user/role"), "member");
    assert_eq!(response.str("/token_type"), "Bearer");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("member").await;

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "name": "Someone Else",
                "email": user.email.to_uppercase(),
                "password": PASSWORD,
                "password_confirmation": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.str("/errors/email/0"),
        "The email has already been taken."
    );
}

#[tokio::test]
async fn test_register_refuses_admin_role() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "name": "Mallory",
                "email": unique_email("admin"),
                "password": PASSWORD,
                "password_confirmation": PASSWORD,
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"].get("role").is_some());
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "name": "Weak",
                "email": unique_email("weak"),
                "password": "password",
                "password_confirmation": "password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"].get("password").is_some());
}

#[tokio::test]
async fn test_login_success_and_bad_credentials() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("trainer").await;

    let ok = app.login(&user.email, PASSWORD).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.str("/message"), "Login successful");
    assert_eq!(ok.str("/user/role"), "trainer");

    let bad = app.login(&user.email, "Wrong-Password-99").await;
    assert_eq!(bad.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(bad.body["errors"].get("email").is_some());

    let unknown = app.login(&unique_email("nobody"), PASSWORD).await;
    assert_eq!(unknown.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_profile_requires_valid_token() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let missing = app.request("GET", "/v1/auth/profile", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.str("/message"), "Unauthenticated.");

    let garbage = app
        .request("GET", "/v1/auth/profile", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let user = app.register("member").await;
    let ok = app
        .request("GET", "/v1/auth/profile", None, Some(&user.token))
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.str("/user/email"), user.email);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("member").await;

    let response = app
        .request("POST", "/v1/auth/logout", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/v1/auth/profile", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_replaces_every_session() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("member").await;
    let second = app.login(&user.email, PASSWORD).await;
    let second_token = second.str("/token").to_string();

    let refreshed = app
        .request("POST", "/v1/auth/refresh", None, Some(&user.token))
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    let new_token = refreshed.str("/token").to_string();

    for old in [&user.token, &second_token] {
        let response = app.request("GET", "/v1/auth/profile", None, Some(old)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    let response = app
        .request("GET", "/v1/auth/profile", None, Some(&new_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_invalidates_old_tokens() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("member").await;
    let new_password = "Deadlift-Daily-77";

    let wrong = app
        .request(
            "PUT",
            "/v1/auth/change-password",
            Some(json!({
                "current_password": "Not-My-Password-1",
                "new_password": new_password,
                "new_password_confirmation": new_password,
            })),
            Some(&user.token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);

    let changed = app
        .request(
            "PUT",
            "/v1/auth/change-password",
            Some(json!({
                "current_password": PASSWORD,
                "new_password": new_password,
                "new_password_confirmation": new_password,
            })),
            Some(&user.token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK, "{:?}", changed.body);

    let stale = app
        .request("GET", "/v1/auth/profile", None, Some(&user.token))
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);

    assert_eq!(
        app.login(&user.email, PASSWORD).await.status,
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        app.login(&user.email, new_password).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_device_token_requires_platform_on_login() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = app.register("member").await;

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(json!({
                "email": user.email,
                "password": PASSWORD,
                "device_token": "fcm-token-123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["errors"].get("platform").is_some());
}

#[tokio::test]
async fn test_password_reset_is_not_available() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/v1/auth/forgot-password",
            Some(json!({ "email": unique_email("forgot") })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/v1/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.str("/message"), "Route not found");
}
