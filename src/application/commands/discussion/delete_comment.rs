// src/application/commands/discussion/delete_comment.rs
use super::DiscussionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{CommentId, UserId},
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: String,
    pub requester: String,
}

impl DiscussionCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let requester = UserId::new(command.requester)
            .map_err(|_| ApplicationError::unauthorized("authentication required"))?;
        let comment_id = CommentId::new(command.comment_id);

        let shared = self.article(&command.slug).await?;
        let mut article = shared.write().await;

        let now = self.clock.now();
        article.delete_comment(&comment_id, &requester, now)?;

        tracing::debug!(slug = %article.slug, comment_id = %comment_id, "comment deleted");
        Ok(())
    }
}
