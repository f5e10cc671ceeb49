//! Integration tests for category CRUD.

use http::StatusCode;

use crate::helpers::TestApp;

async fn admin(app: &TestApp) -> String {
    app.register_and_verify("Ada", "ada@example.com").await
}

#[tokio::test]
async fn test_category_crud_round_trip() {
    let app = TestApp::new();
    let cookie = admin(&app).await;

    let created = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "News", "description": "company news" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/categories/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "News");
    assert_eq!(fetched.body["description"], "company news");

    let updated = app
        .request(
            "PUT",
            &format!("/api/categories/{id}"),
            Some(serde_json::json!({ "name": "Press", "description": null })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Press");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/categories/{id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/categories/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_category_name_conflicts() {
    let app = TestApp::new();
    let cookie = admin(&app).await;

    let first = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "News" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "news" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let app = TestApp::new();
    let cookie = admin(&app).await;

    let category = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "News" })),
            Some(&cookie),
        )
        .await;
    let id = category.body["id"].as_str().unwrap().to_string();

    let blog = app
        .request(
            "POST",
            "/api/blogs",
            Some(serde_json::json!({
                "title": "Hello",
                "category_id": id,
                "blocks": [],
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(blog.status, StatusCode::CREATED);

    let response = app
        .request(
            "DELETE",
            &format!("/api/categories/{id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_category_requires_name() {
    let app = TestApp::new();
    let cookie = admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_requires_session() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/categories", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
