//! Operational commands that bypass the public API.
//!
//! Admin identities are never created over HTTP; they are bootstrapped
//! with the `create-admin` command on the server binary.

use sqlx::PgPool;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    designation: Option<&str>,
) -> Result<User, AppError> {
    UserService::create_admin(pool, first_name, last_name, email, password, designation).await
}
