// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports service liveness and database connectivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use super::ApiContext;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    #[must_use]
    pub fn routes(context: ApiContext) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .with_state(Arc::new(context))
    }
}

/// Report liveness plus a database connectivity probe
async fn handle_health(State(context): State<Arc<ApiContext>>) -> Json<serde_json::Value> {
    let database_ok = context.database.ping().await.is_ok();

    Json(json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "database": if database_ok { "ok" } else { "unreachable" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
