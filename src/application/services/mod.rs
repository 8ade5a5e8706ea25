// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::discussion::DiscussionCommandService,
        ports::{authors::AuthorDirectory, ids::DiscussionIdGenerator, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::article::ArticleStore,
};

pub struct ApplicationServices {
    pub discussion_commands: Arc<DiscussionCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        authors: Arc<dyn AuthorDirectory>,
        ids: Arc<dyn DiscussionIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let discussion_commands = Arc::new(DiscussionCommandService::new(
            Arc::clone(&store),
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&store),
            Arc::clone(&authors),
        ));

        Self {
            discussion_commands,
            article_queries,
        }
    }
}
