// tests/support/mod.rs
use std::sync::Arc;

use axum::Router;
use marginalia::application::services::ApplicationServices;
use marginalia::domain::article::ArticleStore;
use marginalia::infrastructure::{
    authors::StaticAuthorDirectory,
    ids::UuidDiscussionIds,
    store::{InMemoryArticleStore, seed},
    time::SystemClock,
};
use marginalia::presentation::http::{routes::build_router, state::HttpState};

pub mod mocks;

/// Router over a freshly seeded in-memory store. Every test gets its own
/// store, so tests never observe each other's mutations.
pub async fn make_test_router() -> Router {
    let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
    seed::seed_sample_articles(store.as_ref())
        .await
        .expect("seed sample articles");

    let services = ApplicationServices::new(
        store,
        Arc::new(StaticAuthorDirectory::with_sample_authors()),
        Arc::new(UuidDiscussionIds::default()),
        Arc::new(SystemClock::default()),
    );

    build_router(HttpState {
        services: Arc::new(services),
    })
}
