use crate::startup::AppState;
use askama::Template;
use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cat_name: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let cat = state.last_cat.get().await;
    IndexTemplate { cat_name: cat.name }
}

pub async fn about() -> impl IntoResponse {
    AboutTemplate {}
}

pub async fn contact() -> impl IntoResponse {
    ContactTemplate {}
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::debug!(path = %path, "No route matched");
    (StatusCode::NOT_FOUND, NotFoundTemplate { path })
}
