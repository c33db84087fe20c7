//! Request-processing middleware and extractors.
//!
//! - [`auth`]: bearer-token authentication ([`auth::AuthUser`] extractor)
//! - [`role`]: explicit role-based authorization guards
//!
//! The flow is: the `AuthUser` extractor verifies the JWT and yields the
//! caller's claims (401 otherwise); each handler then calls the role guard
//! for the operation's required permission (403 otherwise) before running
//! any business logic.

pub mod auth;
pub mod role;
