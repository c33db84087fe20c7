use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A row in the enrollment ledger: this student is taking this course.
/// At most one row per (student, course) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EnrollDto {
    pub course_id: Uuid,
}

/// Outcome of a registration attempt. A duplicate registration is a benign
/// no-op, not an error.
#[derive(Debug)]
pub enum RegistrationOutcome {
    Registered(Enrollment),
    AlreadyRegistered,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Enrollment>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
