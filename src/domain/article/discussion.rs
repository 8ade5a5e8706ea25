// src/domain/article/discussion.rs
use crate::domain::article::value_objects::{
    CommentBody, CommentId, LikeAction, LikeSet, ReplyId, UserId,
};
use chrono::{DateTime, Utc};

/// First-level discussion entry on an article.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub likes: LikeSet,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author_id: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            body,
            created_at,
            likes: LikeSet::new(),
            replies: Vec::new(),
        }
    }

    pub fn toggle_like(&mut self, user_id: UserId) -> LikeToggle {
        let action = self.likes.toggle(user_id);
        LikeToggle {
            action,
            likes: self.likes.to_vec(),
        }
    }
}

/// Second-level entry attached to one comment. Replies do not nest further.
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: ReplyId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub likes: LikeSet,
}

impl Reply {
    pub fn new(
        id: ReplyId,
        author_id: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            body,
            created_at,
            likes: LikeSet::new(),
        }
    }

    pub fn toggle_like(&mut self, user_id: UserId) -> LikeToggle {
        let action = self.likes.toggle(user_id);
        LikeToggle {
            action,
            likes: self.likes.to_vec(),
        }
    }
}

/// Outcome of a like toggle: what happened plus the resulting like sequence.
#[derive(Debug, Clone)]
pub struct LikeToggle {
    pub action: LikeAction,
    pub likes: Vec<UserId>,
}

impl LikeToggle {
    pub fn count(&self) -> usize {
        self.likes.len()
    }
}
