//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::{CommentService, PageLimits, PostService};
use blog_infra::InMemoryStore;

use crate::config::{AppConfig, DatabaseSettings};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConfig, DbConn, PostgresCommentRepository, PostgresPostRepository};

/// Which store backs the services.
#[derive(Clone)]
pub enum Storage {
    Memory,
    #[cfg(feature = "postgres")]
    Postgres(DbConn),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Whether the store currently answers.
    pub async fn is_available(&self) -> bool {
        match self {
            Storage::Memory => true,
            #[cfg(feature = "postgres")]
            Storage::Postgres(db) => match db.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Database ping failed: {}", e);
                    false
                }
            },
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
    pub page_limits: PageLimits,
    pub storage: Storage,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory(page_limits: PageLimits) -> Self {
        let store = InMemoryStore::new();
        let posts = Arc::new(store.posts());

        Self {
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(Arc::new(store.comments()), posts),
            page_limits,
            storage: Storage::Memory,
        }
    }

    /// State backed by PostgreSQL.
    #[cfg(feature = "postgres")]
    pub fn postgres(db: DbConn, page_limits: PageLimits) -> Self {
        let posts = Arc::new(PostgresPostRepository::new(db.clone()));

        Self {
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(
                Arc::new(PostgresCommentRepository::new(db.clone())),
                posts,
            ),
            page_limits,
            storage: Storage::Postgres(db),
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup error.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match &config.database {
            Some(settings) => Self::from_database(settings, config.page_limits).await,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory(config.page_limits))
            }
        }
    }

    #[cfg(feature = "postgres")]
    async fn from_database(
        settings: &DatabaseSettings,
        page_limits: PageLimits,
    ) -> anyhow::Result<Self> {
        use anyhow::Context;
        use migration::MigratorTrait;

        let db = blog_infra::database::connect(&DatabaseConfig {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
        })
        .await
        .context("failed to connect to database")?;

        if settings.auto_migrate {
            migration::Migrator::up(&db, None)
                .await
                .context("failed to apply migrations")?;
            tracing::info!("Database migrations applied");
        }

        tracing::info!("Application state initialized (postgres)");
        Ok(Self::postgres(db, page_limits))
    }

    #[cfg(not(feature = "postgres"))]
    async fn from_database(
        _settings: &DatabaseSettings,
        page_limits: PageLimits,
    ) -> anyhow::Result<Self> {
        tracing::warn!(
            "DATABASE_URL is set but the postgres feature is disabled - using in-memory store"
        );
        Ok(Self::in_memory(page_limits))
    }
}
