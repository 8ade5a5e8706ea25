use anyhow::Result;
use marginalia::application::{
    ports::{authors::AuthorDirectory, ids::DiscussionIdGenerator, time::Clock},
    services::ApplicationServices,
};
use marginalia::config::AppConfig;
use marginalia::domain::article::ArticleStore;
use marginalia::infrastructure::{
    authors::StaticAuthorDirectory,
    ids::UuidDiscussionIds,
    store::{InMemoryArticleStore, seed},
    time::SystemClock,
};
use marginalia::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
    if config.seed_sample_data() {
        seed::seed_sample_articles(store.as_ref()).await?;
        tracing::info!("seeded sample articles");
    }

    let authors: Arc<dyn AuthorDirectory> = Arc::new(StaticAuthorDirectory::with_sample_authors());
    let ids: Arc<dyn DiscussionIdGenerator> = Arc::new(UuidDiscussionIds::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(store, authors, ids, clock));
    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
