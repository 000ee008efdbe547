// ABOUTME: Main library entry point for the course registration backend
// ABOUTME: Provides submission, admin review, and email notification over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Course Registration API
//!
//! A small registration backend: applicants submit course registrations,
//! an administrator lists, approves, rejects, or deletes them, and state
//! changes fire best-effort notification emails.
//!
//! ## Architecture
//!
//! - **Models**: the `Registration` record and its review status
//! - **Database**: SQLite storage behind an explicitly constructed handle
//! - **Routes**: stateless axum handlers for the public and admin surface
//! - **Notifications**: fire-and-forget email collaborator behind a trait
//! - **Config**: environment-based settings with development defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use course_registration_api::config::ServerConfig;
//! use course_registration_api::server::RegistrationServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     RegistrationServer::new(config).await?.run().await
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Database connection management and registration storage
pub mod database;

/// Unified error handling with HTTP status mapping
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Core data structures for registration records
pub mod models;

/// Best-effort email notification collaborator
pub mod notifications;

/// HTTP route handlers for the public and admin surface
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
