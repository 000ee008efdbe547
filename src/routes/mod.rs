// ABOUTME: HTTP route modules and the shared per-request context
// ABOUTME: Exposes registration, admin, and health route builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes for the registration API.
//!
//! All handlers are thin stateless functions: open the shared database
//! handle, perform one or more data-access calls, optionally fire a
//! best-effort notification, and return a response.

/// Admin review endpoints (list, approve, reject, delete)
pub mod admin;
/// Health check endpoint
pub mod health;
/// Public registration endpoints
pub mod registration;

use crate::database::Database;
use crate::notifications::Notifier;
use serde::Serialize;
use std::sync::Arc;

/// Context shared by every route handler.
///
/// Constructed once at startup and injected into the routers; there is no
/// process-wide singleton.
#[derive(Clone)]
pub struct ApiContext {
    /// Database handle for persistence operations
    pub database: Arc<Database>,
    /// Outbound email sender, possibly disabled
    pub notifier: Arc<dyn Notifier>,
}

impl ApiContext {
    /// Create a new route context
    #[must_use]
    pub fn new(database: Arc<Database>, notifier: Arc<dyn Notifier>) -> Self {
        Self { database, notifier }
    }
}

/// Fixed-message success acknowledgement returned by the mutation endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
}

impl MessageResponse {
    /// Build an acknowledgement from a static message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
