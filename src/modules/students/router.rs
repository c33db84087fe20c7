use axum::{Router, routing::get};

use crate::modules::students::controller::{get_student, get_student_courses, get_students};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/{id}", get(get_student))
        .route("/{id}/courses", get(get_student_courses))
}
