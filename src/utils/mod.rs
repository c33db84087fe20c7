//! Shared utilities.
//!
//! - [`errors`]: application error types and HTTP mapping
//! - [`ids`]: admission/employee number generation
//! - [`jwt`]: JWT token creation and verification
//! - [`password`]: password hashing and verification

pub mod errors;
pub mod ids;
pub mod jwt;
pub mod password;
