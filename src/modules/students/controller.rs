use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{Permission, authorize, authorize_self_or_staff};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::Course;
use crate::modules::enrollments::service::EnrollmentService;
use crate::modules::students::service::StudentService;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// List all students. Staff only.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of students", body = [User]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - staff only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    authorize(auth_user.role(), Permission::StaffOnly)?;

    let students = StudentService::list_students(&state.db).await?;
    Ok(Json(students))
}

/// Retrieve a student by id. Staff, or the student themself.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = User),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    authorize_self_or_staff(&auth_user, id)?;

    let student = StudentService::get_student(&state.db, id).await?;
    Ok(Json(student))
}

/// A student's enrolled courses. Staff, or the student themself.
#[utoipa::path(
    get,
    path = "/api/students/{id}/courses",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Enrolled courses", body = [Course]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Course>>, AppError> {
    authorize_self_or_staff(&auth_user, id)?;
    StudentService::get_student(&state.db, id).await?;

    let courses = EnrollmentService::courses_for_student(&state.db, id).await?;
    Ok(Json(courses))
}
