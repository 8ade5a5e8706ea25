// tests/support/mocks/ids.rs
use marginalia::application::ports::ids::DiscussionIdGenerator;
use marginalia::domain::article::{CommentId, ReplyId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Deterministic id sequence: c0000000000, r0000000001, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl DiscussionIdGenerator for SequentialIds {
    fn comment_id(&self) -> CommentId {
        CommentId::new(format!("c{:010}", self.next.fetch_add(1, Ordering::Relaxed)))
    }

    fn reply_id(&self) -> ReplyId {
        ReplyId::new(format!("r{:010}", self.next.fetch_add(1, Ordering::Relaxed)))
    }
}
