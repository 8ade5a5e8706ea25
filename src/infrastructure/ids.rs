use crate::application::ports::ids::DiscussionIdGenerator;
use crate::domain::article::{CommentId, ReplyId};
use uuid::Uuid;

// 40 bits of hex is plenty against collisions at expected comment volumes.
const ID_SUFFIX_LEN: usize = 10;

/// Random ids with a type tag: `c` + 10 hex chars for comments,
/// `r` + 10 hex chars for replies.
#[derive(Default, Clone)]
pub struct UuidDiscussionIds;

impl UuidDiscussionIds {
    fn random_suffix() -> String {
        Uuid::new_v4().simple().to_string()[..ID_SUFFIX_LEN].to_string()
    }
}

impl DiscussionIdGenerator for UuidDiscussionIds {
    fn comment_id(&self) -> CommentId {
        CommentId::new(format!("c{}", Self::random_suffix()))
    }

    fn reply_id(&self) -> ReplyId {
        ReplyId::new(format!("r{}", Self::random_suffix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_carry_their_type_tag() {
        let ids = UuidDiscussionIds;
        assert!(ids.comment_id().as_str().starts_with('c'));
        assert!(ids.reply_id().as_str().starts_with('r'));
        assert_eq!(ids.comment_id().as_str().len(), 1 + ID_SUFFIX_LEN);
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids = UuidDiscussionIds;
        let generated: HashSet<String> = (0..1000)
            .map(|_| ids.comment_id().as_str().to_string())
            .collect();
        assert_eq!(generated.len(), 1000);
    }
}
