pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::{Role, User};
pub use router::init_users_router;
