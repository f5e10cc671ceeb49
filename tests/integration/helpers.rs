//! Shared test helpers for integration tests.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use pressgate_api::{build_app, build_state, AppState};
use pressgate_core::config::AppConfig;
use pressgate_entity::role::Role;

/// A password that satisfies the registration policy.
pub const PASSWORD: &str = "Quill-Lantern-9-Traverse";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct fixture setup
    pub state: AppState,
}

impl TestApp {
    /// Create a new in-process test application
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let state = build_state(config);
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Register an account, fetch the pending OTP code, verify it, and
    /// return the session cookie.
    pub async fn register_and_verify(&self, name: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": PASSWORD,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "register failed: {:?}",
            response.body
        );

        let code = self
            .state
            .otp_service
            .pending_code(email)
            .await
            .expect("no pending OTP code");

        let response = self
            .request(
                "POST",
                "/api/auth/verify-otp",
                Some(serde_json::json!({ "email": email, "code": code })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "verify-otp failed: {:?}",
            response.body
        );

        response.session_cookie().expect("no session cookie set")
    }

    /// Login and return the session cookie.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "login failed: {:?}",
            response.body
        );
        response.session_cookie().expect("no session cookie set")
    }

    /// Assign roles directly and start a fresh session carrying them.
    pub async fn login_with_roles(&self, email: &str, roles: Vec<Role>) -> String {
        let user = self
            .state
            .user_repo
            .find_by_email(email)
            .expect("user not found");
        self.state
            .user_repo
            .set_roles(&user.id, roles)
            .expect("failed to set roles");
        self.login(email).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(cookie) = cookie {
            req = req.header("Cookie", cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body (Null for non-JSON responses)
    pub body: Value,
}

impl TestResponse {
    /// The `token=...` pair from a Set-Cookie header carrying a non-empty
    /// session token, suitable for a Cookie request header.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|raw| raw.split(';').next())
            .find(|pair| {
                pair.starts_with("token=") && pair.trim_start_matches("token=") != ""
            })
            .map(str::to_string)
    }

    /// Whether a Set-Cookie header clears the session cookie.
    pub fn clears_session_cookie(&self) -> bool {
        self.headers
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|raw| raw.starts_with("token=;") || raw.starts_with("token="))
            && self.session_cookie().is_none()
    }

    /// The Location header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers.get("location").and_then(|v| v.to_str().ok())
    }
}
