use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{Permission, authorize};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::Course;
use crate::modules::enrollments::model::{
    EnrollDto, EnrollmentResponse, MessageResponse, RegistrationOutcome,
};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Enroll the calling student in a course. Enrolling twice is a no-op.
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollDto,
    responses(
        (status = 201, description = "Enrolled in course", body = EnrollmentResponse),
        (status = 200, description = "Already registered for course", body = EnrollmentResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<EnrollDto>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), AppError> {
    authorize(auth_user.role(), Permission::StudentOnly)?;
    let student_id = auth_user.user_id()?;

    match EnrollmentService::register(&state.db, student_id, dto.course_id).await? {
        RegistrationOutcome::Registered(enrollment) => Ok((
            StatusCode::CREATED,
            Json(EnrollmentResponse {
                message: "Enrolled in course".to_string(),
                enrollment: Some(enrollment),
            }),
        )),
        RegistrationOutcome::AlreadyRegistered => Ok((
            StatusCode::OK,
            Json(EnrollmentResponse {
                message: "Already registered for this course".to_string(),
                enrollment: None,
            }),
        )),
    }
}

/// Drop a course the calling student is enrolled in.
#[utoipa::path(
    delete,
    path = "/api/enrollments/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course dropped", body = MessageResponse),
        (status = 400, description = "Not registered for this course", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn unenroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    authorize(auth_user.role(), Permission::StudentOnly)?;
    let student_id = auth_user.user_id()?;

    EnrollmentService::unregister(&state.db, student_id, course_id).await?;
    Ok(Json(MessageResponse {
        message: "Course dropped".to_string(),
    }))
}

/// List the calling student's enrolled courses.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses(
        (status = 200, description = "Enrolled courses", body = [Course]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn my_courses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    authorize(auth_user.role(), Permission::StudentOnly)?;
    let student_id = auth_user.user_id()?;

    let courses = EnrollmentService::courses_for_student(&state.db, student_id).await?;
    Ok(Json(courses))
}
