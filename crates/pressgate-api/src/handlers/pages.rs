//! Admin panel page handlers.
//!
//! The pages are thin shells; the session gate middleware in front of them
//! does the actual work of deciding who may see what. Each handler serves
//! the app shell with the page title filled in.

use axum::extract::Path;
use axum::response::Html;
use uuid::Uuid;

pub async fn login() -> Html<String> {
    shell("Sign in")
}

pub async fn register() -> Html<String> {
    shell("Create account")
}

pub async fn verify_email() -> Html<String> {
    shell("Verify email")
}

pub async fn category_list() -> Html<String> {
    shell("Categories")
}

pub async fn category_add() -> Html<String> {
    shell("Add category")
}

pub async fn category_edit(Path(id): Path<Uuid>) -> Html<String> {
    shell(&format!("Edit category {id}"))
}

pub async fn blog_list() -> Html<String> {
    shell("Blog posts")
}

pub async fn blog_add() -> Html<String> {
    shell("Add blog post")
}

pub async fn blog_edit(Path(id): Path<Uuid>) -> Html<String> {
    shell(&format!("Edit blog post {id}"))
}

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title} | Pressgate</title></head>\n\
         <body><div id=\"root\" data-page=\"{title}\"></div></body>\n</html>"
    ))
}
