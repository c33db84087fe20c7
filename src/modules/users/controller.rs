use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{Permission, authorize};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{CreateTeacherDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a teacher. Admin only; the employee number is generated.
#[utoipa::path(
    post,
    path = "/api/users/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created successfully", body = User),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    authorize(auth_user.role(), Permission::AdminOnly)?;

    let teacher = UserService::create_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}
