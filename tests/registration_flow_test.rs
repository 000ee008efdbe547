// ABOUTME: End-to-end tests for the registration submission and review flow
// ABOUTME: Drives the public and admin endpoints through the assembled router

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{request, sample_submission, setup_app};

#[tokio::test]
async fn test_full_registration_lifecycle() -> Result<()> {
    let (router, _notifier, _dir) = setup_app(false).await?;

    // Submit
    let (status, body) = request(
        &router,
        "POST",
        "/register",
        Some(sample_submission("ana@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful");

    // Record appears in the list as Pending, all fields intact
    let (status, body) = request(&router, "GET", "/admin/registrations", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["full_name"], "Ana Li");
    assert_eq!(record["email"], "ana@example.com");
    assert_eq!(record["course"], "Algebra");
    assert_eq!(record["program"], "Math");
    assert_eq!(record["age"], 21);
    assert_eq!(record["date_field"], "2024-05-01");
    assert_eq!(record["reason"], "interest");
    assert_eq!(record["benefits"], "career");
    assert_eq!(record["status"], "Pending");
    let id = record["id"].as_i64().unwrap();

    // Same email again is a duplicate
    let (status, body) = request(
        &router,
        "POST",
        "/register",
        Some(sample_submission("ana@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(body["error"]["message"], "Email already registered");

    // Approve
    let (status, body) = request(&router, "POST", &format!("/admin/approve/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User approved");

    let (_, body) = request(&router, "GET", "/admin/registrations", None).await;
    assert_eq!(body.as_array().unwrap()[0]["status"], "Accepted");

    // Delete
    let (status, body) = request(&router, "DELETE", &format!("/admin/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (_, body) = request(&router, "GET", "/admin/registrations", None).await;
    assert!(body.as_array().unwrap().is_empty());

    // Approving the deleted id reports not-found
    let (status, body) = request(&router, "POST", &format!("/admin/approve/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_distinct_emails_each_create_one_pending_record() -> Result<()> {
    let (router, _notifier, _dir) = setup_app(false).await?;

    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let (status, _) =
            request(&router, "POST", "/register", Some(sample_submission(email))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = request(&router, "GET", "/admin/registrations", None).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["status"] == "Pending"));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_never_creates_second_record() -> Result<()> {
    let (router, _notifier, _dir) = setup_app(false).await?;

    let (status, _) = request(
        &router,
        "POST",
        "/register",
        Some(sample_submission("dup@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &router,
        "POST",
        "/register",
        Some(sample_submission("dup@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = request(&router, "GET", "/admin/registrations", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_submission_with_only_required_fields() -> Result<()> {
    let (router, _notifier, _dir) = setup_app(false).await?;

    let payload = serde_json::json!({
        "full_name": "Bo Chen",
        "email": "bo@example.com",
        "course": "Geometry"
    });
    let (status, body) = request(&router, "POST", "/register", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful");

    let (_, body) = request(&router, "GET", "/admin/registrations", None).await;
    let record = &body.as_array().unwrap()[0];
    assert_eq!(record["program"], serde_json::Value::Null);
    assert_eq!(record["age"], serde_json::Value::Null);
    assert_eq!(record["status"], "Pending");

    Ok(())
}

#[tokio::test]
async fn test_submission_sends_welcome_email() -> Result<()> {
    let (router, notifier, _dir) = setup_app(false).await?;

    let (status, _) = request(
        &router,
        "POST",
        "/register",
        Some(sample_submission("ana@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "ana@example.com");
    assert!(sent[0].subject.contains("Welcome"));

    Ok(())
}
