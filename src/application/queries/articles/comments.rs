use super::ArticleQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Pure read; never touches `updated_at`.
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let slug = ArticleSlug::new(query.slug)?;
        let shared = self
            .store
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let article = shared.read().await;
        Ok(article.comments.iter().map(CommentDto::from).collect())
    }
}
