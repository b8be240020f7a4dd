#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Every [`TestApp`] runs the real kernel routes against its own SQLite
//! file in the temp directory, so tests never share rows.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

use proofline_kernel::catalog::StaticCatalog;
use proofline_kernel::form::{ContactSubmission, InquirySubmission};
use proofline_kernel::models::{ContactMessage, ServiceInquiry};
use proofline_kernel::services::{StoreError, SubmissionStore};
use proofline_kernel::theme::ThemeEngine;
use proofline_kernel::{AppState, Config, db, routes, session};
use proofline_test_utils::csrf_token_from_html;

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub db: SqlitePool,
    pub state: AppState,
    db_path: PathBuf,
}

impl TestApp {
    /// Create a test application on a fresh database.
    pub async fn new() -> Self {
        let (config, db_path) = test_config();

        let state = AppState::new(&config)
            .await
            .expect("Failed to initialize AppState");

        Self::from_state(state, db_path)
    }

    /// Create a test application whose submission store is `store`.
    ///
    /// Pages, catalog and templates are the real ones.
    pub async fn with_store(store: Arc<dyn SubmissionStore>) -> Self {
        let (config, db_path) = test_config();

        let pool = db::create_pool(&config)
            .await
            .expect("Failed to create pool");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let theme = ThemeEngine::new(&config.templates_dir).expect("Failed to load templates");

        let state = AppState::from_parts(
            pool,
            Arc::new(theme),
            Arc::new(StaticCatalog::builtin()),
            store,
            config.site_name.clone(),
            config.static_dir.clone(),
        );

        Self::from_state(state, db_path)
    }

    fn from_state(state: AppState, db_path: PathBuf) -> Self {
        let session_layer = session::create_session_layer(
            tower_sessions::cookie::SameSite::Strict,
            false,
        );

        // Must match main.rs
        let router = routes::app(state.clone(), session_layer);

        Self {
            router,
            db: state.db().clone(),
            state,
            db_path,
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// Send a request with cookies from a previous response.
    pub async fn request_with_cookies(
        &self,
        mut request: Request<Body>,
        cookies: &str,
    ) -> Response {
        if !cookies.is_empty() {
            request.headers_mut().insert(
                header::COOKIE,
                cookies.parse().expect("Invalid cookie header"),
            );
        }
        self.request(request).await
    }

    /// GET a path.
    pub async fn get(&self, path: &str, cookies: &str) -> Response {
        self.request_with_cookies(Request::get(path).body(Body::empty()).unwrap(), cookies)
            .await
    }

    /// POST a urlencoded form body.
    pub async fn post_form(&self, path: &str, body: String, cookies: &str) -> Response {
        self.request_with_cookies(
            Request::post(path)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
            cookies,
        )
        .await
    }

    /// Load a form page. Returns (session cookies, csrf token).
    pub async fn fetch_form(&self, path: &str) -> (String, String) {
        let response = self.get(path, "").await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let cookies = extract_cookies(&response);
        assert!(!cookies.is_empty(), "form page should start a session");

        let html = response_text(response).await;
        let token = csrf_token_from_html(&html).expect("Should find CSRF token in form");
        (cookies, token)
    }

    /// Number of stored contact messages.
    pub async fn contact_count(&self) -> i64 {
        ContactMessage::count(&self.db).await.unwrap()
    }

    /// Number of stored service inquiries.
    pub async fn inquiry_count(&self) -> i64 {
        ServiceInquiry::count(&self.db).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            std::fs::remove_file(path).ok();
        }
    }
}

/// Config pointing at a unique database file and the project templates.
fn test_config() -> (Config, PathBuf) {
    // Tests run from crates/kernel/, so templates are two levels up
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let project_root = std::path::Path::new(&manifest_dir)
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(std::path::Path::new("."))
        .to_path_buf();

    let db_path = std::env::temp_dir().join(format!("proofline-test-{}.db", Uuid::now_v7()));
    let config = Config::for_database(
        format!("sqlite://{}", db_path.display()),
        project_root.join("templates"),
    );
    (config, db_path)
}

/// Read a response body as text.
pub async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

/// Extract cookies from response for use in subsequent requests.
pub fn extract_cookies(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|cookie| {
            // Extract just the cookie name=value, ignoring attributes
            cookie.split(';').next()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A submission store whose every operation fails.
pub struct UnavailableStore;

#[async_trait]
impl SubmissionStore for UnavailableStore {
    async fn append_contact(&self, _: &ContactSubmission) -> Result<ContactMessage, StoreError> {
        Err(StoreError::StorageUnavailable(anyhow::anyhow!(
            "database is locked"
        )))
    }

    async fn append_inquiry(&self, _: &InquirySubmission) -> Result<ServiceInquiry, StoreError> {
        Err(StoreError::StorageUnavailable(anyhow::anyhow!(
            "database is locked"
        )))
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Err(StoreError::StorageUnavailable(anyhow::anyhow!(
            "database is locked"
        )))
    }

    async fn list_inquiries(&self) -> Result<Vec<ServiceInquiry>, StoreError> {
        Err(StoreError::StorageUnavailable(anyhow::anyhow!(
            "database is locked"
        )))
    }
}
