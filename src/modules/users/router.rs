use axum::{Router, routing::post};

use crate::modules::users::controller::create_teacher;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/teachers", post(create_teacher))
}
