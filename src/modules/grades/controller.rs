use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{Permission, authorize, authorize_self_or_staff};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::grades::model::{CourseGrade, GpaResponse, Score, SetScoreDto};
use crate::modules::grades::service::GradeService;
use crate::modules::users::model::Role;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Set or overwrite a student's score in a course. Teacher of record only.
#[utoipa::path(
    put,
    path = "/api/grades/courses/{course_id}/students/{student_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = SetScoreDto,
    responses(
        (status = 200, description = "Score recorded", body = Score),
        (status = 400, description = "Student not registered for course", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the course's teacher", body = ErrorResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn set_score(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((course_id, student_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(dto): ValidatedJson<SetScoreDto>,
) -> Result<Json<Score>, AppError> {
    authorize(auth_user.role(), Permission::TeacherOnly)?;
    let teacher_id = auth_user.user_id()?;

    let score =
        GradeService::set_score(&state.db, teacher_id, student_id, course_id, dto.score).await?;
    Ok(Json(score))
}

/// A student's per-course grade listing. Staff, or the student themself.
#[utoipa::path(
    get,
    path = "/api/grades/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Grade report", body = [CourseGrade]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn student_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CourseGrade>>, AppError> {
    authorize_self_or_staff(&auth_user, id)?;
    UserService::get_user_with_role(&state.db, id, Role::Student, "Student not found").await?;

    let grades = GradeService::student_grades(&state.db, id).await?;
    Ok(Json(grades))
}

/// A student's credit-hour-weighted GPA. Staff, or the student themself.
#[utoipa::path(
    get,
    path = "/api/grades/students/{id}/gpa",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Computed GPA", body = GpaResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn student_gpa(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<GpaResponse>, AppError> {
    authorize_self_or_staff(&auth_user, id)?;
    UserService::get_user_with_role(&state.db, id, Role::Student, "Student not found").await?;

    let gpa = GradeService::compute_student_gpa(&state.db, id).await?;
    Ok(Json(GpaResponse {
        student_id: id,
        gpa,
    }))
}
