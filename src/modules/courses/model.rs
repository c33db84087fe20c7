use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A catalog course. `teacher_id` is the teacher of record; only they may
/// write scores for the course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub course_code: String,
    pub credit_hours: i32,
    pub teacher_id: Uuid,
    pub created_at: DateTime<Utc>,
}

fn default_credit_hours() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 2, max = 16))]
    pub course_code: String,
    /// Weight of the course in GPA aggregation. Must be at least 1.
    #[serde(default = "default_credit_hours")]
    #[validate(range(min = 1, message = "credit_hours must be at least 1"))]
    pub credit_hours: i32,
    pub teacher_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_hours_default_to_one() {
        let dto: CreateCourseDto = serde_json::from_value(serde_json::json!({
            "name": "Linear Algebra",
            "course_code": "MTH201",
            "teacher_id": Uuid::new_v4(),
        }))
        .unwrap();

        assert_eq!(dto.credit_hours, 1);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn zero_credit_hours_fail_validation() {
        let dto = CreateCourseDto {
            name: "Linear Algebra".to_string(),
            course_code: "MTH201".to_string(),
            credit_hours: 0,
            teacher_id: Uuid::new_v4(),
        };

        assert!(dto.validate().is_err());
    }
}
