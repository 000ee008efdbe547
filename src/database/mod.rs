// ABOUTME: Database connection management and schema migrations
// ABOUTME: Wraps a SQLite connection pool behind an explicitly constructed handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! Single-file SQLite storage for registration records. The [`Database`]
//! handle owns the connection pool and is constructed once at startup, then
//! shared by reference with every route handler. There is no module-level
//! singleton; handlers receive the handle through their shared context.

mod registrations;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database handle for registration storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (and create if absent) the database, then run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_registrations().await?;
        Ok(())
    }

    /// Cheap connectivity probe used by the health endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
