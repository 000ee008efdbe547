// ABOUTME: Shared helpers for integration tests
// ABOUTME: Provides a recording fake notifier, a file-backed test app, and a request driver

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use course_registration_api::{
    database::Database,
    notifications::{NotificationError, Notifier},
    routes::{admin::AdminRoutes, registration::RegistrationRoutes, ApiContext},
};
use tempfile::TempDir;
use tower::ServiceExt;

/// One recorded send attempt
#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
}

/// Test notifier that records every send and optionally fails all of them
pub struct RecordingNotifier {
    fail: bool,
    pub sent: Mutex<Vec<SentMail>>,
}

impl RecordingNotifier {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        _body: &str,
    ) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_owned(),
            subject: subject.to_owned(),
        });
        if self.fail {
            Err(NotificationError::NotConfigured)
        } else {
            Ok(())
        }
    }
}

/// Build the public + admin router over a fresh file-backed database.
///
/// The `TempDir` must stay alive for the duration of the test.
pub async fn setup_app(fail_mail: bool) -> Result<(Router, Arc<RecordingNotifier>, TempDir)> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("registrations_test.db");
    let database = Database::new(&format!("sqlite:{}", db_path.display())).await?;

    let notifier = Arc::new(RecordingNotifier::new(fail_mail));
    let context = ApiContext::new(Arc::new(database), notifier.clone());

    let router = Router::new()
        .merge(RegistrationRoutes::routes(context.clone()))
        .merge(AdminRoutes::routes(context));

    Ok((router, notifier, dir))
}

/// Drive one request through the router and decode the JSON body
pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// A complete valid submission payload
pub fn sample_submission(email: &str) -> serde_json::Value {
    serde_json::json!({
        "full_name": "Ana Li",
        "email": email,
        "course": "Algebra",
        "program": "Math",
        "age": 21,
        "date_field": "2024-05-01",
        "reason": "interest",
        "benefits": "career"
    })
}
