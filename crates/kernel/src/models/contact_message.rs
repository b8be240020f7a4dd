//! Contact message model.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::form::ContactSubmission;

/// Stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    /// Identifier assigned by the table on insert.
    pub id: i64,

    pub name: String,

    pub email: String,

    pub subject: String,

    pub message: String,

    /// Unix timestamp when stored.
    pub submitted_at: i64,
}

impl ContactMessage {
    /// Insert a validated contact message.
    ///
    /// The single `INSERT ... RETURNING` statement either stores the full row
    /// or nothing. `submitted_at` is raised to the newest stored timestamp
    /// inside the statement, under the write lock, so timestamps never
    /// decrease in id order even when a caller's clock reading is stale.
    pub async fn create(
        pool: &SqlitePool,
        input: &ContactSubmission,
        submitted_at: i64,
    ) -> Result<Self> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_message (name, email, subject, message, submitted_at)
            VALUES (?, ?, ?, ?, MAX(?, COALESCE((SELECT MAX(submitted_at) FROM contact_message), 0)))
            RETURNING id, name, email, subject, message, submitted_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(submitted_at)
        .fetch_one(pool)
        .await
        .context("failed to create contact message")?;

        Ok(message)
    }

    /// Find a contact message by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>> {
        let message = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, subject, message, submitted_at FROM contact_message WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch contact message by id")?;

        Ok(message)
    }

    /// List all contact messages, newest first.
    pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<Self>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, submitted_at
            FROM contact_message
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .context("failed to list contact messages")?;

        Ok(messages)
    }

    /// Count stored contact messages.
    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_message")
            .fetch_one(pool)
            .await
            .context("failed to count contact messages")?;

        Ok(count)
    }
}
