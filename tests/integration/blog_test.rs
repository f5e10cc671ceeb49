//! Integration tests for blog post CRUD and list filtering.

use http::StatusCode;

use crate::helpers::TestApp;

struct Fixture {
    cookie: String,
    category_id: String,
}

async fn fixture(app: &TestApp) -> Fixture {
    let cookie = app.register_and_verify("Ada", "ada@example.com").await;
    let category = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "News" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(category.status, StatusCode::CREATED);
    Fixture {
        cookie,
        category_id: category.body["id"].as_str().unwrap().to_string(),
    }
}

#[tokio::test]
async fn test_blog_crud_round_trip_with_blocks() {
    let app = TestApp::new();
    let fx = fixture(&app).await;

    let blocks = serde_json::json!([
        { "id": "b2", "type": "paragraph", "value": { "text": "body" }, "order": 1 },
        { "id": "b1", "type": "heading-one", "value": { "text": "title" }, "order": 0 },
    ]);

    let created = app
        .request(
            "POST",
            "/api/blogs",
            Some(serde_json::json!({
                "title": "Launch notes",
                "category_id": fx.category_id,
                "blocks": blocks,
                "published": true,
            })),
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();
    assert_eq!(created.body["blocks"][0]["type"], "paragraph");

    let fetched = app
        .request("GET", &format!("/api/blogs/{id}"), None, Some(&fx.cookie))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Launch notes");
    assert_eq!(fetched.body["published"], true);

    let updated = app
        .request(
            "PUT",
            &format!("/api/blogs/{id}"),
            Some(serde_json::json!({
                "title": "Launch notes v2",
                "category_id": fx.category_id,
                "blocks": [],
                "published": false,
            })),
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Launch notes v2");
    assert_eq!(updated.body["published"], false);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/blogs/{id}"),
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/blogs/{id}"), None, Some(&fx.cookie))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blog_requires_known_category() {
    let app = TestApp::new();
    let fx = fixture(&app).await;

    let response = app
        .request(
            "POST",
            "/api/blogs",
            Some(serde_json::json!({
                "title": "Orphan",
                "category_id": uuid::Uuid::new_v4(),
                "blocks": [],
            })),
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_by_preset_range() {
    let app = TestApp::new();
    let fx = fixture(&app).await;

    for title in ["one", "two"] {
        let response = app
            .request(
                "POST",
                "/api/blogs",
                Some(serde_json::json!({
                    "title": title,
                    "category_id": fx.category_id,
                    "blocks": [],
                })),
                Some(&fx.cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    // Both posts were created just now, so they fall in this ISO week.
    let response = app
        .request(
            "GET",
            "/api/blogs?preset=this_week",
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 2);

    let response = app
        .request(
            "GET",
            "/api/blogs?preset=last_week",
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 0);

    let response = app
        .request("GET", "/api/blogs?preset=bogus", None, Some(&fx.cookie))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_by_explicit_range_and_category() {
    let app = TestApp::new();
    let fx = fixture(&app).await;

    let other = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "Culture" })),
            Some(&fx.cookie),
        )
        .await;
    let other_id = other.body["id"].as_str().unwrap().to_string();

    for (title, category) in [("a", &fx.category_id), ("b", &other_id)] {
        app.request(
            "POST",
            "/api/blogs",
            Some(serde_json::json!({
                "title": title,
                "category_id": category,
                "blocks": [],
            })),
            Some(&fx.cookie),
        )
        .await;
    }

    let today = chrono::Utc::now().date_naive();
    let response = app
        .request(
            "GET",
            &format!("/api/blogs?from={today}&to={today}&category_id={other_id}"),
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 1);
    assert_eq!(response.body["items"][0]["title"], "b");

    // A one-sided custom range is rejected.
    let response = app
        .request(
            "GET",
            &format!("/api/blogs?from={today}"),
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_paginates() {
    let app = TestApp::new();
    let fx = fixture(&app).await;

    for i in 0..5 {
        app.request(
            "POST",
            "/api/blogs",
            Some(serde_json::json!({
                "title": format!("post {i}"),
                "category_id": fx.category_id,
                "blocks": [],
            })),
            Some(&fx.cookie),
        )
        .await;
    }

    let response = app
        .request(
            "GET",
            "/api/blogs?page=1&page_size=2",
            None,
            Some(&fx.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["total_items"], 5);
    assert_eq!(response.body["total_pages"], 3);
}
