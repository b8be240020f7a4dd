//! Application state shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::catalog::{CatalogRepository, StaticCatalog};
use crate::config::Config;
use crate::db;
use crate::services::{SqlSubmissionStore, SubmissionStore};
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// SQLite connection pool.
    db: SqlitePool,

    /// Theme engine for template rendering.
    theme: Arc<ThemeEngine>,

    /// Read-only product catalog.
    catalog: Arc<dyn CatalogRepository>,

    /// Durable store for accepted form submissions.
    submissions: Arc<dyn SubmissionStore>,

    /// Site name shown in page headers.
    site_name: String,

    /// Directory served under `/static`.
    static_dir: PathBuf,
}

impl AppState {
    /// Create application state: open the database, apply migrations, and
    /// load templates.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        db::run_migrations(&db)
            .await
            .context("failed to run migrations")?;

        info!(url = %config.database_url, "database ready");

        let theme = ThemeEngine::new(&config.templates_dir)
            .context("failed to initialize theme engine")?;

        let catalog = StaticCatalog::builtin();
        info!(
            categories = catalog.categories().len(),
            products = catalog.product_count(),
            "catalog loaded"
        );

        let submissions = SqlSubmissionStore::new(db.clone());

        Ok(Self::from_parts(
            db,
            Arc::new(theme),
            Arc::new(catalog),
            Arc::new(submissions),
            config.site_name.clone(),
            config.static_dir.clone(),
        ))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        db: SqlitePool,
        theme: Arc<ThemeEngine>,
        catalog: Arc<dyn CatalogRepository>,
        submissions: Arc<dyn SubmissionStore>,
        site_name: String,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                theme,
                catalog,
                submissions,
                site_name,
                static_dir,
            }),
        }
    }

    /// Get the database pool.
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    /// Get the product catalog.
    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.inner.catalog.as_ref()
    }

    /// Get the submission store.
    pub fn submissions(&self) -> &dyn SubmissionStore {
        self.inner.submissions.as_ref()
    }

    /// Get the site name.
    pub fn site_name(&self) -> &str {
        &self.inner.site_name
    }

    /// Get the static assets directory.
    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }

    /// Check if the database is reachable.
    pub async fn database_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
