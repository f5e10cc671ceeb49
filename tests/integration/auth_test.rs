//! Integration tests for registration, OTP verification, login, and logout.

use http::StatusCode;

use crate::helpers::{TestApp, PASSWORD};

#[tokio::test]
async fn test_register_verify_login_flow() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert_eq!(response.body["user"]["is_verified"], true);
    // First registered account is the company subject.
    assert_eq!(response.body["user"]["type"], "company");
    assert_eq!(response.body["is_super_admin"], true);
}

#[tokio::test]
async fn test_second_account_is_employee() {
    let app = TestApp::new();
    app.register_and_verify("Ada", "ada@example.com").await;
    let cookie = app.register_and_verify("Grace", "grace@example.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["type"], "employee");
    assert_eq!(response.body["is_super_admin"], false);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register_and_verify("Ada", "ada@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Imposter",
                "email": "Ada@Example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "Password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.register_and_verify("Ada", "ada@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": "Wrong-Password-1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_otp_code_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let code = app
        .state
        .otp_service
        .pending_code("ada@example.com")
        .await
        .unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let response = app
        .request(
            "POST",
            "/api/auth/verify-otp",
            Some(serde_json::json!({ "email": "ada@example.com", "code": wrong })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resend_otp_is_noop_until_cooldown_elapses() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["resend_available_in"], 60);

    // Countdown is running: resend is refused.
    let response = app
        .request(
            "POST",
            "/api/auth/resend-otp",
            Some(serde_json::json!({ "email": "ada@example.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    // Drive the countdown to zero, then resend restarts it at 60.
    for _ in 0..60 {
        app.state.otp_service.tick_cooldowns();
    }
    let response = app
        .request(
            "POST",
            "/api/auth/resend-otp",
            Some(serde_json::json!({ "email": "ada@example.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["resend_available_in"], 60);
    assert_eq!(
        app.state.otp_service.resend_remaining("ada@example.com"),
        60
    );
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unverified_login_cannot_use_api() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let cookie = app.login("ada@example.com").await;
    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_ends_session_for_every_holder() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The same (still unexpired) token no longer works.
    let response = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
