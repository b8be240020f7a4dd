//! Service inquiry model.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::form::{InquirySubmission, ServiceType};

/// Stored service inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ServiceInquiry {
    /// Identifier assigned by the table on insert.
    pub id: i64,

    pub company: String,

    pub contact_name: String,

    pub email: String,

    /// NULL when the phone field was left blank.
    pub phone: Option<String>,

    /// Service type code (see [`ServiceType::code`]).
    pub service_type: String,

    pub project_details: String,

    /// Unix timestamp when stored.
    pub submitted_at: i64,
}

impl ServiceInquiry {
    /// Insert a validated service inquiry.
    ///
    /// `submitted_at` is raised to the newest stored timestamp inside the
    /// statement, as [`ContactMessage::create`](super::ContactMessage::create) does.
    pub async fn create(
        pool: &SqlitePool,
        input: &InquirySubmission,
        submitted_at: i64,
    ) -> Result<Self> {
        let inquiry = sqlx::query_as::<_, ServiceInquiry>(
            r#"
            INSERT INTO service_inquiry
                (company, contact_name, email, phone, service_type, project_details, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, MAX(?, COALESCE((SELECT MAX(submitted_at) FROM service_inquiry), 0)))
            RETURNING id, company, contact_name, email, phone, service_type, project_details, submitted_at
            "#,
        )
        .bind(&input.company)
        .bind(&input.contact_name)
        .bind(&input.email)
        .bind(input.phone.as_deref())
        .bind(input.service_type.code())
        .bind(&input.project_details)
        .bind(submitted_at)
        .fetch_one(pool)
        .await
        .context("failed to create service inquiry")?;

        Ok(inquiry)
    }

    /// Find a service inquiry by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>> {
        let inquiry = sqlx::query_as::<_, ServiceInquiry>(
            r#"
            SELECT id, company, contact_name, email, phone, service_type, project_details, submitted_at
            FROM service_inquiry
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch service inquiry by id")?;

        Ok(inquiry)
    }

    /// List all service inquiries, newest first.
    pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<Self>> {
        let inquiries = sqlx::query_as::<_, ServiceInquiry>(
            r#"
            SELECT id, company, contact_name, email, phone, service_type, project_details, submitted_at
            FROM service_inquiry
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .context("failed to list service inquiries")?;

        Ok(inquiries)
    }

    /// Count stored service inquiries.
    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service_inquiry")
            .fetch_one(pool)
            .await
            .context("failed to count service inquiries")?;

        Ok(count)
    }

    /// Display label of the stored service type.
    pub fn service_label(&self) -> &str {
        ServiceType::label_for(&self.service_type)
    }
}
