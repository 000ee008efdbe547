// ABOUTME: Server assembly - wires config, database, notifier, and routes together
// ABOUTME: Builds the axum router and runs it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server assembly.
//!
//! [`RegistrationServer::new`] constructs the database handle and notifier
//! from configuration, [`RegistrationServer::router`] assembles the full
//! route tree, and [`RegistrationServer::run`] binds and serves until
//! shutdown.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    config::ServerConfig,
    database::Database,
    middleware::cors::setup_cors,
    notifications::build_notifier,
    routes::{admin::AdminRoutes, health::HealthRoutes, registration::RegistrationRoutes, ApiContext},
};

/// The assembled registration server
pub struct RegistrationServer {
    config: ServerConfig,
    context: ApiContext,
}

impl RegistrationServer {
    /// Construct server resources from configuration.
    ///
    /// Creates the database file (and its parent directory) if absent and
    /// selects the mail transport, which degrades to always-failing when
    /// credentials are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated, or the
    /// mail client cannot be built.
    pub async fn new(config: ServerConfig) -> Result<Self> {
        if let Some(path) = config.database_url.strip_prefix("sqlite:") {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
        }

        let database = Database::new(&config.database_url).await?;
        info!("Database initialized: {}", config.database_url);

        let notifier = build_notifier(config.mailer.as_ref())?;
        if config.mailer.is_none() {
            info!("Mail credentials absent, notification delivery disabled");
        }

        let context = ApiContext::new(Arc::new(database), notifier);

        Ok(Self { config, context })
    }

    /// Shared route context, exposed for integration tests
    #[must_use]
    pub fn context(&self) -> ApiContext {
        self.context.clone()
    }

    /// Assemble the full route tree
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(RegistrationRoutes::routes(self.context.clone()))
            .merge(AdminRoutes::routes(self.context.clone()))
            .merge(HealthRoutes::routes(self.context.clone()))
            .nest_service("/frontend", ServeDir::new(&self.config.frontend_dir))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.config.cors_allowed_origins))
    }

    /// Bind the listen socket and serve until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails.
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Course Registration API listening on {addr}");

        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
    }
    info!("Shutdown signal received");
}
