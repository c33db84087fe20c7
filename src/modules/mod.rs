//! Feature modules. Each module follows the same structure: `model.rs`
//! for data types and DTOs, `service.rs` for business logic, and
//! `controller.rs`/`router.rs` for the HTTP surface.

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;
pub mod users;
