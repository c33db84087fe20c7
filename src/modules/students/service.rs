use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{Role, User, UserRecord};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<User>, AppError> {
        let records = sqlx::query_as::<_, UserRecord>(
            "SELECT id, first_name, last_name, email, role, admission_number,
                    employee_number, designation, created_at, updated_at
             FROM users
             WHERE role = 'student'
             ORDER BY last_name, first_name",
        )
        .fetch_all(db)
        .await?;

        records.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        UserService::get_user_with_role(db, id, Role::Student, "Student not found").await
    }
}
