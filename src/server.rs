//! Server assembly: pool, stores, services, router, and the Axum
//! lifecycle with graceful shutdown.

use crate::application::services::{ActivityService, CatalogService};
use crate::config::Config;
use crate::domain::repositories::ActivityStore;
use crate::infrastructure::activity::{MemoryActivityStore, RedisActivityStore};
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::persistence::{
    PgBannerRepository, PgCategoryRepository, PgProductRepository, PgReviewRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Brings the whole service up and blocks until shutdown.
///
/// Connects the pool, applies pending migrations, picks Redis or the
/// in-process fallbacks for the page cache and activity store, and
/// serves the router until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Fails when the database is unreachable, a migration cannot be
/// applied, or the listen address cannot be bound. A missing Redis is
/// not fatal; the stores fall back in-process with a warning.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("database connection failed")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("migration failed")?;
    info!("Database ready, migrations applied");

    let cache = connect_cache(&config).await;
    let activity_store = connect_activity_store(&config).await;

    let db = Arc::new(pool.clone());
    let catalog = Arc::new(CatalogService::new(
        Arc::new(PgCategoryRepository::new(db.clone())),
        Arc::new(PgBannerRepository::new(db.clone())),
        Arc::new(PgProductRepository::new(db.clone())),
        Arc::new(PgReviewRepository::new(db)),
        cache.clone(),
        config.page_cache_ttl_seconds,
    ));
    let activity = Arc::new(ActivityService::new(activity_store.clone()));

    let state = AppState {
        db: pool,
        catalog,
        activity,
        cache,
        activity_store,
        session_secret: config.session_signing_secret.clone(),
        list_page_size: config.list_page_size,
    };

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("LISTEN address did not parse")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving on http://{addr}");

    let app = app_router(state);
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Redis page cache when configured and reachable, else in-process.
async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        info!("Redis not configured, page cache running in-process");
        return Arc::new(MemoryCache::new());
    };
    match RedisCache::connect(redis_url).await {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            warn!("Page cache falling back in-process: {e}");
            Arc::new(MemoryCache::new())
        }
    }
}

/// Redis activity store when configured and reachable, else in-process.
///
/// Shares the Redis instance with the page cache. The in-process
/// fallback keeps cart badges and view history working for a single
/// process, which is enough for local development.
async fn connect_activity_store(config: &Config) -> Arc<dyn ActivityStore> {
    let Some(redis_url) = &config.redis_url else {
        info!("Redis not configured, activity store running in-process");
        return Arc::new(MemoryActivityStore::new());
    };
    match RedisActivityStore::connect(redis_url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Activity store falling back in-process: {e}");
            Arc::new(MemoryActivityStore::new())
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
