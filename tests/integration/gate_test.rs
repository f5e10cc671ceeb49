//! Integration tests for the session gate over the page routes.

use chrono::Utc;
use http::StatusCode;
use uuid::Uuid;

use pressgate_auth::Claims;
use pressgate_entity::user::SubjectKind;

use crate::helpers::TestApp;

fn expired_cookie(app: &TestApp) -> String {
    let now = Utc::now().timestamp();
    let issued = app
        .state
        .jwt_encoder
        .sign(Claims {
            sub: Uuid::new_v4(),
            email: "a@b.test".to_string(),
            kind: SubjectKind::Employee,
            is_verified: true,
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
            roles: None,
        })
        .unwrap();
    format!("token={}", issued.token)
}

#[tokio::test]
async fn test_private_page_without_token_redirects_to_entry() {
    let app = TestApp::new();

    for path in ["/blog", "/category", "/blog/add", "/category/add"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(response.location(), Some("/login"), "path {path}");
        // No token was stored, so nothing is cleared.
        assert!(!response.headers.contains_key("set-cookie"));
    }
}

#[tokio::test]
async fn test_public_page_without_token_is_served() {
    let app = TestApp::new();

    for path in ["/login", "/register", "/verify-email"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_expired_token_is_cleared_and_redirected_to_entry() {
    let app = TestApp::new();
    let cookie = expired_cookie(&app);

    for path in ["/blog", "/login"] {
        let response = app.request("GET", path, None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(response.location(), Some("/login"), "path {path}");
        assert!(response.clears_session_cookie(), "path {path}");
    }
}

#[tokio::test]
async fn test_garbage_token_is_cleared_and_redirected_to_entry() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/blog", None, Some("token=not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
    assert!(response.clears_session_cookie());
}

#[tokio::test]
async fn test_valid_session_on_public_page_redirects_to_landing() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;

    for path in ["/login", "/register", "/verify-email"] {
        let response = app.request("GET", path, None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(response.location(), Some("/blog"), "path {path}");
    }
}

#[tokio::test]
async fn test_valid_session_on_private_page_is_served() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;

    for path in ["/blog", "/category", "/blog/add"] {
        let response = app.request("GET", path, None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_edit_pages_take_an_id() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;
    let id = Uuid::new_v4();

    for path in [
        format!("/blog/edit/{id}"),
        format!("/category/edit/{id}"),
    ] {
        let response = app.request("GET", &path, None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK, "path {path}");
    }
}

#[tokio::test]
async fn test_session_ended_elsewhere_gates_other_holders_out() {
    let app = TestApp::new();
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;

    // The page is served while the session is active.
    let response = app.request("GET", "/blog", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    // Logout happens in "another tab" holding the same token.
    let response = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // This tab still holds a valid, unexpired token. The gate clears it
    // and redirects to the entry route.
    let response = app.request("GET", "/blog", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
    assert!(response.clears_session_cookie());
}
