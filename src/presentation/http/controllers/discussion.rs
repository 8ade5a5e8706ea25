// src/presentation/http/controllers/discussion.rs
use crate::application::{
    commands::discussion::{
        AddCommentCommand, AddReplyCommand, DeleteCommentCommand, DeleteReplyCommand,
        ToggleCommentLikeCommand, ToggleReplyLikeCommand,
    },
    dto::{CommentDto, LikeToggleDto, ReplyDto},
    queries::articles::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Requester;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

// Body fields stay optional so a missing field surfaces as a 400 validation
// error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .article_queries
        .list_comments(ListCommentsQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = AddCommentCommand {
        slug,
        user_id: payload.user_id.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
    };

    state
        .services
        .discussion_commands
        .add_comment(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    requester: Requester,
    Path((slug, comment_id)): Path<(String, String)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .discussion_commands
        .delete_comment(DeleteCommentCommand {
            slug,
            comment_id,
            requester: requester.0,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn like_comment(
    Extension(state): Extension<HttpState>,
    Path((slug, comment_id)): Path<(String, String)>,
    Json(payload): Json<LikeRequest>,
) -> HttpResult<Json<LikeToggleDto>> {
    state
        .services
        .discussion_commands
        .toggle_comment_like(ToggleCommentLikeCommand {
            slug,
            comment_id,
            user_id: payload.user_id.unwrap_or_default(),
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn add_reply(
    Extension(state): Extension<HttpState>,
    Path((slug, comment_id)): Path<(String, String)>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<ReplyDto>)> {
    let command = AddReplyCommand {
        slug,
        comment_id,
        user_id: payload.user_id.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
    };

    state
        .services
        .discussion_commands
        .add_reply(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub async fn delete_reply(
    Extension(state): Extension<HttpState>,
    requester: Requester,
    Path((slug, comment_id, reply_id)): Path<(String, String, String)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .discussion_commands
        .delete_reply(DeleteReplyCommand {
            slug,
            comment_id,
            reply_id,
            requester: requester.0,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn like_reply(
    Extension(state): Extension<HttpState>,
    Path((slug, comment_id, reply_id)): Path<(String, String, String)>,
    Json(payload): Json<LikeRequest>,
) -> HttpResult<Json<LikeToggleDto>> {
    state
        .services
        .discussion_commands
        .toggle_reply_like(ToggleReplyLikeCommand {
            slug,
            comment_id,
            reply_id,
            user_id: payload.user_id.unwrap_or_default(),
        })
        .await
        .into_http()
        .map(Json)
}
