use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CreateCourseDto};
use crate::modules::users::model::Role;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        // The teacher of record must exist and actually be a teacher.
        UserService::get_user_with_role(db, dto.teacher_id, Role::Teacher, "Teacher not found")
            .await?;

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, course_code, credit_hours, teacher_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, course_code, credit_hours, teacher_id, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.course_code)
        .bind(dto.credit_hours)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(format!(
                        "A course with code {} already exists",
                        dto.course_code
                    ));
                }
            }
            AppError::database(e)
        })?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, course_code, credit_hours, teacher_id, created_at
             FROM courses
             ORDER BY course_code",
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, name, course_code, credit_hours, teacher_id, created_at
             FROM courses
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        Ok(course)
    }
}
