use crate::domain::article::{Article, ArticleSlug, ArticleStore, SharedArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local article store. The outer lock only guards the map itself;
/// each article carries its own lock, so mutating one article never blocks
/// readers or writers of another.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<HashMap<ArticleSlug, SharedArticle>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<SharedArticle>> {
        Ok(self.articles.read().await.get(slug).map(Arc::clone))
    }

    async fn list(&self) -> DomainResult<Vec<SharedArticle>> {
        Ok(self.articles.read().await.values().map(Arc::clone).collect())
    }

    async fn insert(&self, article: Article) -> DomainResult<()> {
        let slug = article.slug.clone();
        self.articles
            .write()
            .await
            .insert(slug, Arc::new(RwLock::new(article)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleTitle, LikeSet, UserId};
    use chrono::Utc;

    fn article(slug: &str) -> Article {
        let now = Utc::now();
        Article {
            slug: ArticleSlug::new(slug).unwrap(),
            author_id: UserId::new("author").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            tags: Vec::new(),
            cover_image_url: None,
            content: Vec::new(),
            likes: LikeSet::new(),
            view_count: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = InMemoryArticleStore::new();
        store.insert(article("first")).await.unwrap();

        let slug = ArticleSlug::new("first").unwrap();
        let shared = store.find_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(shared.read().await.slug, slug);
    }

    #[tokio::test]
    async fn unknown_slug_is_none() {
        let store = InMemoryArticleStore::new();
        let slug = ArticleSlug::new("missing").unwrap();
        assert!(store.find_by_slug(&slug).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_every_article() {
        let store = InMemoryArticleStore::new();
        store.insert(article("a")).await.unwrap();
        store.insert(article("b")).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
