// src/application/commands/discussion/add_comment.rs
use super::DiscussionCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::article::{Comment, CommentBody, UserId},
};

pub struct AddCommentCommand {
    pub slug: String,
    pub user_id: String,
    pub content: String,
}

impl DiscussionCommandService {
    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        // Resolve the slug first: an unknown article is 404 even when the body
        // is invalid. Validation still runs before the write lock, so a
        // rejected request mutates nothing.
        let shared = self.article(&command.slug).await?;

        let author = UserId::new(command.user_id)?;
        let body = CommentBody::new(command.content)?;

        let mut article = shared.write().await;

        let now = self.clock.now();
        let comment = Comment::new(self.ids.comment_id(), author, body, now);
        let dto = CommentDto::from(&comment);
        article.add_comment(comment, now);

        tracing::debug!(slug = %article.slug, comment_id = %dto.comment_id, "comment added");
        Ok(dto)
    }
}
