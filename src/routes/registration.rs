// ABOUTME: Public registration route handlers
// ABOUTME: Handles the root redirect and new registration submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::{
    errors::{AppError, AppResult},
    models::NewRegistration,
    notifications,
};

use super::{ApiContext, MessageResponse};

/// Registration submission payload.
///
/// Only the three identity fields are required; everything else is stored
/// as submitted, without validation beyond type checking.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Applicant's full name
    pub full_name: String,
    /// Applicant's email
    pub email: String,
    /// Course being applied for
    pub course: String,
    /// Optional program
    #[serde(default)]
    pub program: Option<String>,
    /// Optional age
    #[serde(default)]
    pub age: Option<i64>,
    /// Optional date string (e.g. `YYYY-MM-DD`)
    #[serde(default)]
    pub date_field: Option<String>,
    /// Optional motivation
    #[serde(default)]
    pub reason: Option<String>,
    /// Optional expected benefits
    #[serde(default)]
    pub benefits: Option<String>,
}

/// Public registration routes
pub struct RegistrationRoutes;

impl RegistrationRoutes {
    /// Create the public routes
    #[must_use]
    pub fn routes(context: ApiContext) -> Router {
        Router::new()
            .route("/", get(handle_root))
            .route("/register", post(handle_register))
            .with_state(Arc::new(context))
    }
}

/// Redirect the bare root to the static registration page
async fn handle_root() -> Redirect {
    Redirect::temporary("/frontend/register.html")
}

/// Handle a registration submission.
///
/// The duplicate check runs before the insert so callers get the friendly
/// 400; a concurrent submission racing past the check trips the UNIQUE
/// constraint instead and surfaces as a generic server error.
async fn handle_register(
    State(context): State<Arc<ApiContext>>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    info!("Registration attempt for email: {}", request.email);

    let existing = context
        .database
        .get_registration_by_email(&request.email)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to check for existing registration");
            AppError::database(format!("Failed to check existing registration: {e}"))
        })?;

    if existing.is_some() {
        warn!("Registration blocked: email '{}' already exists", request.email);
        return Err(AppError::duplicate_email());
    }

    let new_registration = NewRegistration {
        full_name: request.full_name.clone(),
        email: request.email.clone(),
        course: request.course.clone(),
        program: request.program,
        age: request.age,
        date_field: request.date_field,
        reason: request.reason,
        benefits: request.benefits,
    };

    let id = context
        .database
        .create_registration(&new_registration)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store registration");
            AppError::database(format!("Failed to store registration: {e}"))
        })?;

    info!("New registration stored: {} (id {id})", request.email);

    // Best-effort welcome email; delivery problems never fail the request
    let (subject, body) = notifications::welcome_message(&request.full_name, &request.course);
    if let Err(e) = context.notifier.send(&request.email, &subject, &body).await {
        warn!(error = %e, "Failed to send welcome email to {}", request.email);
    }

    Ok(Json(MessageResponse::new("Registration successful")))
}
