use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Letter grade derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "letter_grade", rename_all = "UPPERCASE")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// A student's recorded score in a course, with its derived grade.
/// At most one row per (student, course) pair; writes are upserts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub score: f64,
    pub grade: Grade,
    pub updated_at: DateTime<Utc>,
}

/// Score write request. The value is conventionally in [0, 100] but is not
/// range-checked; out-of-band values fall through the grading ladder to F.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SetScoreDto {
    pub score: f64,
}

/// One line of a student's grade report: an enrolled course and the score
/// recorded for it, if any.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CourseGrade {
    pub course_id: Uuid,
    pub course_name: String,
    pub course_code: String,
    pub credit_hours: i32,
    pub score: Option<f64>,
    pub grade: Option<Grade>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GpaResponse {
    pub student_id: Uuid,
    pub gpa: f64,
}
