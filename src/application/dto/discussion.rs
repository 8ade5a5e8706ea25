use crate::domain::article::{Comment, LikeToggle, Reply};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub likes: Vec<String>,
    pub replies: Vec<ReplyDto>,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            comment_id: comment.id.as_str().to_string(),
            user_id: comment.author_id.as_str().to_string(),
            content: comment.body.as_str().to_string(),
            created_at: comment.created_at,
            likes: likes_to_strings(comment.likes.as_slice()),
            replies: comment.replies.iter().map(ReplyDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDto {
    pub reply_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub likes: Vec<String>,
}

impl From<&Reply> for ReplyDto {
    fn from(reply: &Reply) -> Self {
        Self {
            reply_id: reply.id.as_str().to_string(),
            user_id: reply.author_id.as_str().to_string(),
            content: reply.body.as_str().to_string(),
            created_at: reply.created_at,
            likes: likes_to_strings(reply.likes.as_slice()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeToggleDto {
    pub action: String,
    pub likes: Vec<String>,
    pub count: usize,
}

impl From<LikeToggle> for LikeToggleDto {
    fn from(outcome: LikeToggle) -> Self {
        Self {
            action: outcome.action.as_str().to_string(),
            count: outcome.count(),
            likes: outcome.likes.into_iter().map(String::from).collect(),
        }
    }
}

fn likes_to_strings(likes: &[crate::domain::article::UserId]) -> Vec<String> {
    likes.iter().map(|u| u.as_str().to_string()).collect()
}
