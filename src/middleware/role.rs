//! Role-based authorization gate.
//!
//! Authorization is an explicit guard call at the top of each operation,
//! not a decorator or router layer: handlers resolve the caller's role from
//! verified claims and call [`authorize`] (or [`authorize_self_or_staff`])
//! before touching any business logic.

use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

/// Permission classes required by the operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AdminOnly,
    /// Admins and teachers.
    StaffOnly,
    TeacherOnly,
    StudentOnly,
}

/// Pure predicate over the caller's role. Denial is a distinguishable
/// `Unauthorized` outcome raised before any business logic runs.
pub fn authorize(role: Role, required: Permission) -> Result<(), AppError> {
    let allowed = match required {
        Permission::AdminOnly => role == Role::Admin,
        Permission::StaffOnly => matches!(role, Role::Admin | Role::Teacher),
        Permission::TeacherOnly => role == Role::Teacher,
        Permission::StudentOnly => role == Role::Student,
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::unauthorized(format!(
            "Access denied. Operation requires {:?}, caller role is {:?}",
            required, role
        )))
    }
}

/// Staff may read any student's record; a student may only read their own.
pub fn authorize_self_or_staff(auth_user: &AuthUser, target_id: Uuid) -> Result<(), AppError> {
    match auth_user.role() {
        Role::Admin | Role::Teacher => Ok(()),
        Role::Student => {
            if auth_user.user_id()? == target_id {
                Ok(())
            } else {
                Err(AppError::forbidden(
                    "Students can only access their own records",
                ))
            }
        }
    }
}
