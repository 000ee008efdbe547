// ABOUTME: Server binary for the course registration backend
// ABOUTME: Parses CLI args, loads env config, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Course Registration API Server Binary
//!
//! Starts the registration backend with SQLite storage and best-effort
//! email notifications.

use anyhow::Result;
use clap::Parser;
use course_registration_api::{config::ServerConfig, logging, server::RegistrationServer};
use tracing::info;

#[derive(Parser)]
#[command(name = "course-registration-server")]
#[command(about = "Course Registration API - submissions, admin review, notifications")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Configuration: {}", config.summary());

    let server = RegistrationServer::new(config).await?;
    server.run().await
}
