// ABOUTME: Admin review route handlers for registration management
// ABOUTME: Handles listing, approval, rejection, and deletion of registrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, warn};

use crate::{
    errors::{AppError, AppResult},
    models::{Registration, RegistrationStatus},
    notifications,
};

use super::{ApiContext, MessageResponse};

/// Admin routes for reviewing registrations
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin routes
    #[must_use]
    pub fn routes(context: ApiContext) -> Router {
        Router::new()
            .route("/admin/registrations", get(handle_list_registrations))
            .route("/admin/approve/:id", post(handle_approve))
            .route("/admin/reject/:id", post(handle_reject))
            .route("/admin/delete/:id", delete(handle_delete))
            .with_state(Arc::new(context))
    }
}

/// Handle registration listing: all records, all fields, no paging
async fn handle_list_registrations(
    State(context): State<Arc<ApiContext>>,
) -> AppResult<impl IntoResponse> {
    let registrations = context.database.list_registrations().await.map_err(|e| {
        error!(error = %e, "Failed to list registrations");
        AppError::database(format!("Failed to list registrations: {e}"))
    })?;

    info!("Retrieved {} registrations", registrations.len());
    Ok(Json(registrations))
}

/// Fetch the record and persist the new review status.
///
/// The status write commits before any notification is attempted, so the
/// state change is durable regardless of delivery outcome.
async fn review_registration(
    context: &ApiContext,
    id: i64,
    status: RegistrationStatus,
) -> AppResult<Registration> {
    let registration = context
        .database
        .get_registration(id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch registration {id}");
            AppError::database(format!("Failed to fetch registration: {e}"))
        })?
        .ok_or_else(|| AppError::not_found("User"))?;

    context
        .database
        .update_registration_status(id, status)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update status of registration {id}");
            AppError::database(format!("Failed to update registration status: {e}"))
        })?;

    info!(
        "Registration {id} ({}) marked {status}",
        registration.email
    );
    Ok(registration)
}

/// Handle approval of a pending registration
async fn handle_approve(
    State(context): State<Arc<ApiContext>>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let registration = review_registration(&context, id, RegistrationStatus::Accepted).await?;

    let (subject, body) =
        notifications::acceptance_message(&registration.full_name, &registration.course);
    if let Err(e) = context
        .notifier
        .send(&registration.email, &subject, &body)
        .await
    {
        warn!(error = %e, "Failed to send approval email to {}", registration.email);
    }

    Ok(Json(MessageResponse::new("User approved")))
}

/// Handle rejection of a pending registration
async fn handle_reject(
    State(context): State<Arc<ApiContext>>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let registration = review_registration(&context, id, RegistrationStatus::Rejected).await?;

    let (subject, body) =
        notifications::rejection_message(&registration.full_name, &registration.course);
    if let Err(e) = context
        .notifier
        .send(&registration.email, &subject, &body)
        .await
    {
        warn!(error = %e, "Failed to send rejection email to {}", registration.email);
    }

    Ok(Json(MessageResponse::new("User rejected")))
}

/// Handle permanent deletion of a registration. No notification is sent.
async fn handle_delete(
    State(context): State<Arc<ApiContext>>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let registration = context
        .database
        .get_registration(id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch registration {id}");
            AppError::database(format!("Failed to fetch registration: {e}"))
        })?
        .ok_or_else(|| AppError::not_found("User"))?;

    context.database.delete_registration(id).await.map_err(|e| {
        error!(error = %e, "Failed to delete registration {id}");
        AppError::database(format!("Failed to delete registration: {e}"))
    })?;

    info!("Registration {id} ({}) deleted", registration.email);
    Ok(Json(MessageResponse::new("User deleted")))
}
