use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::grades::controller::{set_score, student_gpa, student_grades};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/courses/{course_id}/students/{student_id}", put(set_score))
        .route("/students/{id}", get(student_grades))
        .route("/students/{id}/gpa", get(student_gpa))
}
