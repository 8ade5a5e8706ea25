// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, discussion};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{delete, get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/articles/{slug}", get(articles::get_article_by_slug))
        .route(
            "/api/v1/articles/{slug}/comments",
            get(discussion::list_comments).post(discussion::add_comment),
        )
        .route(
            "/api/v1/articles/{slug}/comments/{comment_id}",
            delete(discussion::delete_comment),
        )
        .route(
            "/api/v1/articles/{slug}/comments/{comment_id}/like",
            post(discussion::like_comment),
        )
        .route(
            "/api/v1/articles/{slug}/comments/{comment_id}/replies",
            post(discussion::add_reply),
        )
        .route(
            "/api/v1/articles/{slug}/comments/{comment_id}/replies/{reply_id}",
            delete(discussion::delete_reply),
        )
        .route(
            "/api/v1/articles/{slug}/comments/{comment_id}/replies/{reply_id}/like",
            post(discussion::like_reply),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
