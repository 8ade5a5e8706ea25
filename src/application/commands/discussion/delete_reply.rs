// src/application/commands/discussion/delete_reply.rs
use super::DiscussionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{CommentId, ReplyId, UserId},
};

pub struct DeleteReplyCommand {
    pub slug: String,
    pub comment_id: String,
    pub reply_id: String,
    pub requester: String,
}

impl DiscussionCommandService {
    pub async fn delete_reply(&self, command: DeleteReplyCommand) -> ApplicationResult<()> {
        let requester = UserId::new(command.requester)
            .map_err(|_| ApplicationError::unauthorized("authentication required"))?;
        let comment_id = CommentId::new(command.comment_id);
        let reply_id = ReplyId::new(command.reply_id);

        let shared = self.article(&command.slug).await?;
        let mut article = shared.write().await;

        let now = self.clock.now();
        article.delete_reply(&comment_id, &reply_id, &requester, now)?;

        tracing::debug!(
            slug = %article.slug,
            comment_id = %comment_id,
            reply_id = %reply_id,
            "reply deleted"
        );
        Ok(())
    }
}
