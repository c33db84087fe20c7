use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{Role, User, UserRecord};
use crate::modules::users::service::{UserService, map_user_insert_error};
use crate::utils::errors::AppError;
use crate::utils::ids::admission_number;
use crate::utils::jwt::{issue_token_pair, verify_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, TokenKind, TokenPair};

pub struct AuthService;

impl AuthService {
    /// Register a new student account. Duplicate email is a hard conflict,
    /// unlike duplicate enrollment which is a benign no-op elsewhere.
    #[instrument(skip(db, dto))]
    pub async fn register_student(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;
        let admission_number = admission_number();

        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (first_name, last_name, email, password, role, admission_number)
             VALUES ($1, $2, $3, $4, 'student', $5)
             RETURNING id, first_name, last_name, email, role, admission_number,
                       employee_number, designation, created_at, updated_at",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&admission_number)
        .fetch_one(db)
        .await
        .map_err(|e| map_user_insert_error(e, &dto.email))?;

        record.try_into()
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct Credentials {
            id: Uuid,
            email: String,
            password: String,
            role: Role,
        }

        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT id, email, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let tokens = issue_token_pair(
            credentials.id,
            &credentials.email,
            credentials.role,
            jwt_config,
        )?;
        let user = UserService::get_user(db, credentials.id).await?;

        Ok(LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user,
        })
    }

    /// Exchange a valid refresh token for a fresh token pair. The identity
    /// is re-checked against the store so deleted users cannot refresh.
    #[instrument(skip(db, refresh_token, jwt_config))]
    pub async fn refresh(
        db: &PgPool,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<TokenPair, AppError> {
        let claims = verify_token(refresh_token, jwt_config, TokenKind::Refresh)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthenticated("Invalid user ID in token"))?;

        let user = UserService::get_user(db, user_id)
            .await
            .map_err(|_| AppError::unauthenticated("Account no longer exists"))?;

        issue_token_pair(user.id, &user.email, user.role, jwt_config)
    }
}
