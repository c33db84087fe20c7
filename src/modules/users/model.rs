//! Identity models and DTOs.
//!
//! A person is a single `users` row carrying a role tag plus a
//! role-specific payload ([`RoleDetails`]), not a class hierarchy. The role
//! is immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

/// Role tag carried by every identity; determines permitted operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

/// Raw identity row. Which payload columns are populated depends on the
/// role tag; [`User`] exposes them as a typed variant.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub admission_number: Option<String>,
    pub employee_number: Option<String>,
    pub designation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role-specific payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RoleDetails {
    Student { admission_number: String },
    Teacher { employee_number: String },
    Admin { designation: Option<String> },
}

/// API-facing identity. Never carries the password credential.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub details: RoleDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = AppError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let details = match record.role {
            Role::Student => RoleDetails::Student {
                admission_number: record.admission_number.ok_or_else(|| {
                    AppError::database(anyhow::anyhow!(
                        "student {} has no admission number",
                        record.id
                    ))
                })?,
            },
            Role::Teacher => RoleDetails::Teacher {
                employee_number: record.employee_number.ok_or_else(|| {
                    AppError::database(anyhow::anyhow!(
                        "teacher {} has no employee number",
                        record.id
                    ))
                })?,
            },
            Role::Admin => RoleDetails::Admin {
                designation: record.designation,
            },
        };

        Ok(User {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            role: record.role,
            details,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// DTO for creating a teacher (admin-only operation). The employee number
/// is generated server-side.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}
