use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::Course;
use crate::modules::courses::service::CourseService;
use crate::modules::enrollments::model::{Enrollment, RegistrationOutcome};
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    /// Register a student for a course. The course must exist; an existing
    /// enrollment short-circuits to `AlreadyRegistered` without writing.
    #[instrument(skip(db))]
    pub async fn register(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<RegistrationOutcome, AppError> {
        CourseService::get_course(db, course_id).await?;

        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM enrollments WHERE student_id = $1 AND course_id = $2",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let inserted = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, course_id)
             VALUES ($1, $2)
             ON CONFLICT (student_id, course_id) DO NOTHING
             RETURNING id, student_id, course_id, created_at",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(db)
        .await?;

        // A concurrent registration can win the race between the existence
        // check and the insert; that also counts as already registered.
        match inserted {
            Some(enrollment) => Ok(RegistrationOutcome::Registered(enrollment)),
            None => Ok(RegistrationOutcome::AlreadyRegistered),
        }
    }

    /// Drop a course. Unregistering without a prior registration is the
    /// caller's error, distinct from the course not existing.
    ///
    /// Any recorded score for the pair is deleted with the enrollment (the
    /// `scores` table cascades from it), so re-enrolling later starts
    /// unscored rather than resurrecting the old grade.
    #[instrument(skip(db))]
    pub async fn unregister(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        CourseService::get_course(db, course_id).await?;

        let result = sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request("Not registered for this course"));
        }

        Ok(())
    }

    /// The courses a student is currently enrolled in, ordered by course
    /// code for a stable listing.
    #[instrument(skip(db))]
    pub async fn courses_for_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT c.id, c.name, c.course_code, c.credit_hours, c.teacher_id, c.created_at
             FROM courses c
             INNER JOIN enrollments e ON e.course_id = c.id
             WHERE e.student_id = $1
             ORDER BY c.course_code",
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    pub async fn is_enrolled(db: &PgPool, student_id: Uuid, course_id: Uuid) -> Result<bool, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM enrollments WHERE student_id = $1 AND course_id = $2",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(db)
        .await?;

        Ok(existing.is_some())
    }
}
