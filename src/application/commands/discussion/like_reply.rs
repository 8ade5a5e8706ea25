// src/application/commands/discussion/like_reply.rs
use super::DiscussionCommandService;
use crate::{
    application::{dto::LikeToggleDto, error::ApplicationResult},
    domain::article::{CommentId, ReplyId, UserId},
};

pub struct ToggleReplyLikeCommand {
    pub slug: String,
    pub comment_id: String,
    pub reply_id: String,
    pub user_id: String,
}

impl DiscussionCommandService {
    pub async fn toggle_reply_like(
        &self,
        command: ToggleReplyLikeCommand,
    ) -> ApplicationResult<LikeToggleDto> {
        // Unknown article wins over a missing userId.
        let shared = self.article(&command.slug).await?;

        let user = UserId::new(command.user_id)?;
        let comment_id = CommentId::new(command.comment_id);
        let reply_id = ReplyId::new(command.reply_id);

        let mut article = shared.write().await;

        let now = self.clock.now();
        let outcome = article.toggle_reply_like(&comment_id, &reply_id, user, now)?;

        tracing::debug!(
            slug = %article.slug,
            comment_id = %comment_id,
            reply_id = %reply_id,
            action = outcome.action.as_str(),
            "reply like toggled"
        );
        Ok(outcome.into())
    }
}
