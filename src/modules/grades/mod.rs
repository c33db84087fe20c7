pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::{Grade, Score};
pub use router::init_grades_router;
pub use service::{grade_point, score_to_grade, weighted_gpa};
