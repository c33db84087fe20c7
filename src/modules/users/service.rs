use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{CreateTeacherDto, Role, User, UserRecord};
use crate::utils::errors::AppError;
use crate::utils::ids::employee_number;
use crate::utils::password::hash_password;

const USER_COLUMNS: &str = "id, first_name, last_name, email, role, admission_number, \
                            employee_number, designation, created_at, updated_at";

/// The users table has three unique keys. Only the email one is the
/// caller's to correct; a collision on a generated admission or employee
/// number is an internal anomaly and must not claim the email is taken.
fn unique_conflict_message(constraint: Option<&str>, email: &str) -> Option<String> {
    match constraint {
        Some("users_email_key") => Some(format!("A user with email {email} already exists")),
        _ => None,
    }
}

/// Maps a failed users insert to the right error: a 409 for a duplicate
/// email, a storage failure for everything else.
pub(crate) fn map_user_insert_error(err: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(msg) = unique_conflict_message(db_err.constraint(), email) {
                return AppError::conflict(msg);
            }
        }
    }
    AppError::database(err)
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        record.try_into()
    }

    /// Fetch a user and check it carries the expected role tag.
    #[instrument(skip(db))]
    pub async fn get_user_with_role(
        db: &PgPool,
        id: Uuid,
        expected: Role,
        not_found_msg: &str,
    ) -> Result<User, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND role = $2"
        ))
        .bind(id)
        .bind(expected)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(not_found_msg))?;

        record.try_into()
    }

    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;
        let employee_number = employee_number();

        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users (first_name, last_name, email, password, role, employee_number)
             VALUES ($1, $2, $3, $4, 'teacher', $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&employee_number)
        .fetch_one(db)
        .await
        .map_err(|e| map_user_insert_error(e, &dto.email))?;

        record.try_into()
    }

    /// Create an admin identity. Admins are never created through the
    /// public API; this is reached from the `create-admin` CLI entry point.
    #[instrument(skip(db, password))]
    pub async fn create_admin(
        db: &PgPool,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        designation: Option<&str>,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(password)?;

        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users (first_name, last_name, email, password, role, designation)
             VALUES ($1, $2, $3, $4, 'admin', $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(&hashed_password)
        .bind(designation)
        .fetch_one(db)
        .await
        .map_err(|e| map_user_insert_error(e, email))?;

        record.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_gets_a_conflict_message() {
        let msg = unique_conflict_message(Some("users_email_key"), "ada@example.com");
        assert_eq!(
            msg.as_deref(),
            Some("A user with email ada@example.com already exists")
        );
    }

    #[test]
    fn generated_number_collisions_are_not_email_conflicts() {
        assert_eq!(
            unique_conflict_message(Some("users_admission_number_key"), "ada@example.com"),
            None
        );
        assert_eq!(
            unique_conflict_message(Some("users_employee_number_key"), "ada@example.com"),
            None
        );
        assert_eq!(unique_conflict_message(None, "ada@example.com"), None);
    }
}
