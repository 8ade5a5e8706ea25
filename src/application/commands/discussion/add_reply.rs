// src/application/commands/discussion/add_reply.rs
use super::DiscussionCommandService;
use crate::{
    application::{dto::ReplyDto, error::ApplicationResult},
    domain::article::{CommentBody, CommentId, Reply, UserId},
};

pub struct AddReplyCommand {
    pub slug: String,
    pub comment_id: String,
    pub user_id: String,
    pub content: String,
}

impl DiscussionCommandService {
    pub async fn add_reply(&self, command: AddReplyCommand) -> ApplicationResult<ReplyDto> {
        // Unknown article wins over an invalid body.
        let shared = self.article(&command.slug).await?;

        let author = UserId::new(command.user_id)?;
        let body = CommentBody::new(command.content)?;
        let comment_id = CommentId::new(command.comment_id);

        let mut article = shared.write().await;

        let now = self.clock.now();
        let reply = Reply::new(self.ids.reply_id(), author, body, now);
        let dto = ReplyDto::from(&reply);
        article.add_reply(&comment_id, reply, now)?;

        tracing::debug!(
            slug = %article.slug,
            comment_id = %comment_id,
            reply_id = %dto.reply_id,
            "reply added"
        );
        Ok(dto)
    }
}
