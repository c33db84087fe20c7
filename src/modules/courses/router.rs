use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::courses::controller::{create_course, get_course, get_courses};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(get_courses))
        .route("/{id}", get(get_course))
}
