// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::authors::AuthorDirectory, domain::article::ArticleStore};

pub struct ArticleQueryService {
    pub(super) store: Arc<dyn ArticleStore>,
    pub(super) authors: Arc<dyn AuthorDirectory>,
}

impl ArticleQueryService {
    pub fn new(store: Arc<dyn ArticleStore>, authors: Arc<dyn AuthorDirectory>) -> Self {
        Self { store, authors }
    }
}
