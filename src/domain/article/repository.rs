use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Handle to one stored article. The per-entry lock serializes mutations to
/// that article; articles never contend with each other.
pub type SharedArticle = Arc<RwLock<Article>>;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<SharedArticle>>;
    async fn list(&self) -> DomainResult<Vec<SharedArticle>>;
    async fn insert(&self, article: Article) -> DomainResult<()>;
}
