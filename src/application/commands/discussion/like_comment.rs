// src/application/commands/discussion/like_comment.rs
use super::DiscussionCommandService;
use crate::{
    application::{dto::LikeToggleDto, error::ApplicationResult},
    domain::article::{CommentId, UserId},
};

pub struct ToggleCommentLikeCommand {
    pub slug: String,
    pub comment_id: String,
    pub user_id: String,
}

impl DiscussionCommandService {
    pub async fn toggle_comment_like(
        &self,
        command: ToggleCommentLikeCommand,
    ) -> ApplicationResult<LikeToggleDto> {
        // Unknown article wins over a missing userId.
        let shared = self.article(&command.slug).await?;

        let user = UserId::new(command.user_id)?;
        let comment_id = CommentId::new(command.comment_id);

        let mut article = shared.write().await;

        let now = self.clock.now();
        let outcome = article.toggle_comment_like(&comment_id, user, now)?;

        tracing::debug!(
            slug = %article.slug,
            comment_id = %comment_id,
            action = outcome.action.as_str(),
            "comment like toggled"
        );
        Ok(outcome.into())
    }
}
