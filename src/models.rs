// ABOUTME: Core data structures for registration records and their review lifecycle
// ABOUTME: Defines the Registration entity and the Pending/Accepted/Rejected status enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model for course registrations.
//!
//! A [`Registration`] is created exactly once by the public submission
//! endpoint and afterwards only its [`RegistrationStatus`] changes, driven
//! by the admin approve/reject endpoints. Deletion removes the row outright.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a registration.
///
/// Every record starts as `Pending`. Approve moves it to `Accepted`, reject
/// to `Rejected`. There is no transition back to `Pending` and no transition
/// between the two reviewed states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// Submitted and awaiting admin review
    Pending,
    /// Approved by an administrator
    Accepted,
    /// Rejected by an administrator
    Rejected,
}

impl RegistrationStatus {
    /// Stable string form used in the database column
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse the database string form back into a status
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Accepted" => Some(Self::Accepted),
            "Rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored course registration record
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    /// Row id, assigned by the database on insert
    pub id: i64,
    /// Applicant's full name
    pub full_name: String,
    /// Applicant's email, unique across all records
    pub email: String,
    /// Course being applied for
    pub course: String,
    /// Optional program the course belongs to
    pub program: Option<String>,
    /// Optional applicant age
    pub age: Option<i64>,
    /// Optional date string (e.g. `YYYY-MM-DD`), stored as submitted
    pub date_field: Option<String>,
    /// Optional free-text motivation
    pub reason: Option<String>,
    /// Optional free-text expected benefits
    pub benefits: Option<String>,
    /// Current review status
    pub status: RegistrationStatus,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Field set accepted by the submission endpoint.
///
/// Status and id are deliberately absent: inserts always start `Pending`
/// and the id comes from the database.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    /// Applicant's full name
    pub full_name: String,
    /// Applicant's email
    pub email: String,
    /// Course being applied for
    pub course: String,
    /// Optional program
    pub program: Option<String>,
    /// Optional age
    pub age: Option<i64>,
    /// Optional date string
    pub date_field: Option<String>,
    /// Optional motivation
    pub reason: Option<String>,
    /// Optional expected benefits
    pub benefits: Option<String>,
}
