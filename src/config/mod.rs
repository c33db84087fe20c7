//! Application configuration.
//!
//! Each submodule covers one configuration concern, loaded from
//! environment variables at startup:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL pool initialization and migrations
//! - [`jwt`]: token secret and expiries

pub mod cors;
pub mod database;
pub mod jwt;
