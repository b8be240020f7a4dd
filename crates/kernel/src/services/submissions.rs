//! Submission store: durable append and newest-first listing of accepted
//! form submissions.
//!
//! Identifiers come from the table's own AUTOINCREMENT column, so appends
//! from several processes sharing one database never collide and ids are
//! never reused. Every append is a single statement and is atomic.

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, info};

use crate::form::{ContactSubmission, InquirySubmission};
use crate::models::{ContactMessage, ServiceInquiry};

/// Submission store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not accept or serve the request.
    #[error("storage unavailable")]
    StorageUnavailable(#[source] anyhow::Error),
}

/// Durable storage for accepted submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a contact message, returning it with its id and timestamp.
    async fn append_contact(&self, input: &ContactSubmission) -> Result<ContactMessage, StoreError>;

    /// Store a service inquiry, returning it with its id and timestamp.
    async fn append_inquiry(&self, input: &InquirySubmission)
    -> Result<ServiceInquiry, StoreError>;

    /// All contact messages, newest first (ties by id, highest first).
    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError>;

    /// All service inquiries, newest first (ties by id, highest first).
    async fn list_inquiries(&self) -> Result<Vec<ServiceInquiry>, StoreError>;
}

/// [`SubmissionStore`] backed by the SQLite pool.
#[derive(Clone)]
pub struct SqlSubmissionStore {
    pool: SqlitePool,
}

impl SqlSubmissionStore {
    /// Create a store over a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn unavailable(operation: &'static str) -> impl FnOnce(anyhow::Error) -> StoreError {
    move |e| {
        error!(error = %e, operation, "submission store unavailable");
        StoreError::StorageUnavailable(e)
    }
}

#[async_trait]
impl SubmissionStore for SqlSubmissionStore {
    async fn append_contact(&self, input: &ContactSubmission) -> Result<ContactMessage, StoreError> {
        let now = chrono::Utc::now().timestamp();
        let message = ContactMessage::create(&self.pool, input, now)
            .await
            .map_err(unavailable("append_contact"))?;

        info!(id = message.id, name = %message.name, "new contact message");
        Ok(message)
    }

    async fn append_inquiry(
        &self,
        input: &InquirySubmission,
    ) -> Result<ServiceInquiry, StoreError> {
        let now = chrono::Utc::now().timestamp();
        let inquiry = ServiceInquiry::create(&self.pool, input, now)
            .await
            .map_err(unavailable("append_inquiry"))?;

        info!(
            id = inquiry.id,
            company = %inquiry.company,
            service_type = %inquiry.service_type,
            "new service inquiry"
        );
        Ok(inquiry)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError> {
        ContactMessage::list_recent(&self.pool)
            .await
            .map_err(unavailable("list_contacts"))
    }

    async fn list_inquiries(&self) -> Result<Vec<ServiceInquiry>, StoreError> {
        ServiceInquiry::list_recent(&self.pool)
            .await
            .map_err(unavailable("list_inquiries"))
    }
}
