use axum::{
    Router,
    routing::{delete, post},
};

use crate::modules::enrollments::controller::{enroll, my_courses, unenroll};
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(enroll).get(my_courses))
        .route("/{course_id}", delete(unenroll))
}
