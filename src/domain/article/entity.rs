// src/domain/article/entity.rs
use crate::domain::article::discussion::{Comment, LikeToggle, Reply};
use crate::domain::article::value_objects::{
    ArticleSlug, ArticleTitle, CommentId, LikeSet, ReplyId, UserId,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// One body paragraph. Paragraph-level likes and notes are read-only data
/// surfaced by the article view; nothing mutates them here.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub id: String,
    pub text: String,
    pub likes: LikeSet,
    pub notes: Vec<ParagraphNote>,
}

#[derive(Debug, Clone)]
pub struct ParagraphNote {
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Article aggregate. The comment tree hangs off it and is only mutated
/// through the methods below, which all stamp `updated_at`.
#[derive(Debug, Clone)]
pub struct Article {
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    pub content: Vec<Paragraph>,
    pub likes: LikeSet,
    pub view_count: u64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn add_comment(&mut self, comment: Comment, now: DateTime<Utc>) {
        self.comments.push(comment);
        self.touch(now);
    }

    /// Removes the comment and, with it, every reply underneath. Only the
    /// comment's author may delete; a second delete of the same id is NotFound.
    pub fn delete_comment(
        &mut self,
        comment_id: &CommentId,
        requester: &UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let index = self
            .comments
            .iter()
            .position(|c| &c.id == comment_id)
            .ok_or_else(comment_not_found)?;

        if self.comments[index].author_id != *requester {
            return Err(DomainError::Forbidden(
                "only the comment author may delete it".into(),
            ));
        }

        self.comments.remove(index);
        self.touch(now);
        Ok(())
    }

    pub fn toggle_comment_like(
        &mut self,
        comment_id: &CommentId,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<LikeToggle> {
        let comment = self.comment_mut(comment_id).ok_or_else(comment_not_found)?;
        let outcome = comment.toggle_like(user_id);
        self.touch(now);
        Ok(outcome)
    }

    pub fn add_reply(
        &mut self,
        comment_id: &CommentId,
        reply: Reply,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let comment = self.comment_mut(comment_id).ok_or_else(comment_not_found)?;
        comment.replies.push(reply);
        self.touch(now);
        Ok(())
    }

    /// Missing comment and missing reply collapse into one NotFound; the
    /// caller cannot tell which level was absent.
    pub fn delete_reply(
        &mut self,
        comment_id: &CommentId,
        reply_id: &ReplyId,
        requester: &UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let comment = self
            .comment_mut(comment_id)
            .ok_or_else(reply_path_not_found)?;
        let index = comment
            .replies
            .iter()
            .position(|r| &r.id == reply_id)
            .ok_or_else(reply_path_not_found)?;

        if comment.replies[index].author_id != *requester {
            return Err(DomainError::Forbidden(
                "only the reply author may delete it".into(),
            ));
        }

        comment.replies.remove(index);
        self.touch(now);
        Ok(())
    }

    pub fn toggle_reply_like(
        &mut self,
        comment_id: &CommentId,
        reply_id: &ReplyId,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<LikeToggle> {
        let comment = self
            .comment_mut(comment_id)
            .ok_or_else(reply_path_not_found)?;
        let reply = comment
            .replies
            .iter_mut()
            .find(|r| &r.id == reply_id)
            .ok_or_else(reply_path_not_found)?;

        let outcome = reply.toggle_like(user_id);
        self.touch(now);
        Ok(outcome)
    }

    fn comment_mut(&mut self, comment_id: &CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| &c.id == comment_id)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

fn comment_not_found() -> DomainError {
    DomainError::NotFound("comment not found".into())
}

fn reply_path_not_found() -> DomainError {
    DomainError::NotFound("comment or reply not found".into())
}
