use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, RefreshRequest, RegisterRequestDto, TokenKind, TokenPair,
};
use crate::modules::courses::model::{Course, CreateCourseDto};
use crate::modules::enrollments::model::{
    EnrollDto, Enrollment, EnrollmentResponse, MessageResponse,
};
use crate::modules::grades::model::{CourseGrade, GpaResponse, Grade, Score, SetScoreDto};
use crate::modules::users::model::{CreateTeacherDto, Role, RoleDetails, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::users::controller::create_teacher,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::enrollments::controller::enroll,
        crate::modules::enrollments::controller::unenroll,
        crate::modules::enrollments::controller::my_courses,
        crate::modules::grades::controller::set_score,
        crate::modules::grades::controller::student_grades,
        crate::modules::grades::controller::student_gpa,
    ),
    components(
        schemas(
            User,
            Role,
            RoleDetails,
            CreateTeacherDto,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            RefreshRequest,
            TokenPair,
            TokenKind,
            Course,
            CreateCourseDto,
            Enrollment,
            EnrollDto,
            EnrollmentResponse,
            MessageResponse,
            Score,
            SetScoreDto,
            Grade,
            CourseGrade,
            GpaResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and token refresh"),
        (name = "Users", description = "Staff account management"),
        (name = "Students", description = "Student records"),
        (name = "Courses", description = "Course catalog"),
        (name = "Enrollments", description = "Course enrollment ledger"),
        (name = "Grades", description = "Score recording and GPA")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
