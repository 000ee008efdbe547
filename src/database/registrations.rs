// ABOUTME: Registration table migrations and CRUD operations
// ABOUTME: Handles insert, lookup by id/email, listing, status updates, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Database;
use crate::models::{NewRegistration, Registration, RegistrationStatus};
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

/// Map a database row to a [`Registration`].
///
/// Explicit mapping instead of a derive: the status column is validated
/// against the known set and the timestamp is normalized to UTC.
fn row_to_registration(row: &SqliteRow) -> Result<Registration> {
    let status_text: String = row.try_get("status")?;
    let status = RegistrationStatus::parse(&status_text)
        .ok_or_else(|| anyhow!("invalid status value in database: {status_text}"))?;

    let created_at: NaiveDateTime = row.try_get("created_at")?;

    Ok(Registration {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        email: row.try_get("email")?,
        course: row.try_get("course")?,
        program: row.try_get("program")?,
        age: row.try_get("age")?,
        date_field: row.try_get("date_field")?,
        reason: row.try_get("reason")?,
        benefits: row.try_get("benefits")?,
        status,
        created_at: DateTime::<Utc>::from_naive_utc_and_offset(created_at, Utc),
    })
}

impl Database {
    /// Create the registrations table and its email index
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_registrations(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS registrations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                course TEXT NOT NULL,
                program TEXT,
                age INTEGER,
                date_field TEXT,
                reason TEXT,
                benefits TEXT,
                status TEXT NOT NULL DEFAULT 'Pending' CHECK (status IN ('Pending', 'Accepted', 'Rejected')),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_registrations_email ON registrations(email)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert a new registration and return its assigned id.
    ///
    /// The status column is left to its `Pending` default; callers cannot
    /// create a record in any other state.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the email
    /// uniqueness constraint is violated by a concurrent submission.
    pub async fn create_registration(&self, registration: &NewRegistration) -> Result<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO registrations (full_name, email, course, program, age, date_field, reason, benefits)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&registration.full_name)
        .bind(&registration.email)
        .bind(&registration.course)
        .bind(&registration.program)
        .bind(registration.age)
        .bind(&registration.date_field)
        .bind(&registration.reason)
        .bind(&registration.benefits)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch a registration by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails.
    pub async fn get_registration(&self, id: i64) -> Result<Option<Registration>> {
        let row = sqlx::query("SELECT * FROM registrations WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_registration).transpose()
    }

    /// Fetch a registration by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails.
    pub async fn get_registration_by_email(&self, email: &str) -> Result<Option<Registration>> {
        let row = sqlx::query("SELECT * FROM registrations WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_registration).transpose()
    }

    /// List all registrations in store order
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row mapping fails.
    pub async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let rows = sqlx::query("SELECT * FROM registrations")
            .fetch_all(self.pool())
            .await?;

        rows.iter().map(row_to_registration).collect()
    }

    /// Set the status of an already-fetched registration.
    ///
    /// Status is the only field that is ever updated after creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn update_registration_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<()> {
        sqlx::query("UPDATE registrations SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Remove a registration permanently
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete_registration(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(())
    }
}
