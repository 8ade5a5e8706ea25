// src/application/ports/ids.rs
use crate::domain::article::{CommentId, ReplyId};

/// Produces identifiers unique for the process lifetime. Implementations may
/// rely on a sufficiently large random space instead of a central counter.
pub trait DiscussionIdGenerator: Send + Sync {
    fn comment_id(&self) -> CommentId;
    fn reply_id(&self) -> ReplyId;
}
