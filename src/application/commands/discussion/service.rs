// src/application/commands/discussion/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{ids::DiscussionIdGenerator, time::Clock},
    },
    domain::article::{ArticleSlug, ArticleStore, SharedArticle},
};

pub struct DiscussionCommandService {
    pub(super) store: Arc<dyn ArticleStore>,
    pub(super) ids: Arc<dyn DiscussionIdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DiscussionCommandService {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        ids: Arc<dyn DiscussionIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, ids, clock }
    }

    pub(super) async fn article(&self, slug: &str) -> ApplicationResult<SharedArticle> {
        let slug = ArticleSlug::new(slug)?;
        self.store
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
