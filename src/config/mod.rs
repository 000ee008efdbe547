// ABOUTME: Environment-based server configuration for deployment-specific settings
// ABOUTME: Parses port, database URL, static asset dir, CORS origins, and mail credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management.
//!
//! All runtime settings come from environment variables with sensible
//! development defaults. Mail credentials are optional; when absent,
//! notification sending degrades to always-failing without affecting any
//! other endpoint.

use anyhow::{Context, Result};
use std::env;

/// Default HTTP port when `HTTP_PORT` is not set
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default SQLite database location when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/registrations.db";

/// Default front-end bundle directory when `FRONTEND_DIR` is not set
const DEFAULT_FRONTEND_DIR: &str = "./frontend";

/// Credentials for the HTTP mail API
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Mail API endpoint the messages are POSTed to
    pub api_url: String,
    /// Sender address placed in outgoing messages
    pub from_address: String,
    /// Bearer secret for the mail API
    pub api_key: String,
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// SQLite database URL (`sqlite:<path>`)
    pub database_url: String,
    /// Directory holding the pre-built front-end bundle
    pub frontend_dir: String,
    /// Comma-separated CORS origin list, or `*` for any origin
    pub cors_allowed_origins: String,
    /// Mail transport credentials; `None` disables delivery
    pub mailer: Option<MailerConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let frontend_dir =
            env::var("FRONTEND_DIR").unwrap_or_else(|_| DEFAULT_FRONTEND_DIR.to_owned());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned());

        let mailer = mailer_from(
            env::var("MAIL_API_URL").ok(),
            env::var("MAIL_FROM_ADDRESS").ok(),
            env::var("MAIL_API_KEY").ok(),
        );

        Ok(Self {
            http_port,
            database_url,
            frontend_dir,
            cors_allowed_origins,
            mailer,
        })
    }

    /// One-line configuration summary for startup logging, without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} frontend={} cors={} mail={}",
            self.http_port,
            self.database_url,
            self.frontend_dir,
            self.cors_allowed_origins,
            if self.mailer.is_some() {
                "configured"
            } else {
                "disabled"
            }
        )
    }
}

/// Assemble mail credentials; all three variables must be present
fn mailer_from(
    api_url: Option<String>,
    from_address: Option<String>,
    api_key: Option<String>,
) -> Option<MailerConfig> {
    match (api_url, from_address, api_key) {
        (Some(api_url), Some(from_address), Some(api_key)) => Some(MailerConfig {
            api_url,
            from_address,
            api_key,
        }),
        _ => None,
    }
}
