mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_course, create_student, create_teacher, unique_email};
use gradebook::config::cors::CorsConfig;
use gradebook::config::jwt::JwtConfig;
use gradebook::router::init_router;
use gradebook::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "email": email, "password": password }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn enroll(app: axum::Router, token: &str, course_id: Uuid) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/enrollments")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(json!({ "course_id": course_id }).to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn score_count(pool: &PgPool, student_id: Uuid, course_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM scores WHERE student_id = $1 AND course_id = $2",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn dropping_a_course_discards_the_recorded_score(pool: PgPool) {
    let teacher_email = unique_email("teacher");
    let student_email = unique_email("student");
    let password = "testpass123";

    let mut tx = pool.begin().await.unwrap();
    let teacher_id = create_teacher(&mut tx, &teacher_email, password).await;
    let student_id = create_student(&mut tx, &student_email, password).await;
    let course_id = create_course(&mut tx, teacher_id, "MTH101", 3).await;
    tx.commit().await.unwrap();

    let student_token =
        get_auth_token(setup_test_app(pool.clone()).await, &student_email, password).await;
    let teacher_token =
        get_auth_token(setup_test_app(pool.clone()).await, &teacher_email, password).await;

    let response = enroll(setup_test_app(pool.clone()).await, &student_token, course_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!(
                    "/api/grades/courses/{course_id}/students/{student_id}"
                ))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {teacher_token}"))
                .body(Body::from(json!({ "score": 95.0 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["grade"], "A");
    assert_eq!(score_count(&pool, student_id, course_id).await, 1);

    // Dropping the course must take the score with it.
    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/enrollments/{course_id}"))
                .header("authorization", format!("Bearer {student_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(score_count(&pool, student_id, course_id).await, 0);

    // Retaking the course starts unscored; the old grade must not resurface.
    let response = enroll(setup_test_app(pool.clone()).await, &student_token, course_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .uri(format!("/api/grades/students/{student_id}"))
                .header("authorization", format!("Bearer {student_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let grades = json_body(response).await;
    assert_eq!(grades.as_array().unwrap().len(), 1);
    assert_eq!(grades[0]["score"], Value::Null);
    assert_eq!(grades[0]["grade"], Value::Null);

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .uri(format!("/api/grades/students/{student_id}/gpa"))
                .header("authorization", format!("Bearer {student_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["gpa"], 0.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn re_enrolling_while_registered_is_a_benign_no_op(pool: PgPool) {
    let teacher_email = unique_email("teacher");
    let student_email = unique_email("student");
    let password = "testpass123";

    let mut tx = pool.begin().await.unwrap();
    let teacher_id = create_teacher(&mut tx, &teacher_email, password).await;
    create_student(&mut tx, &student_email, password).await;
    let course_id = create_course(&mut tx, teacher_id, "PHY201", 2).await;
    tx.commit().await.unwrap();

    let student_token =
        get_auth_token(setup_test_app(pool.clone()).await, &student_email, password).await;

    let response = enroll(setup_test_app(pool.clone()).await, &student_token, course_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = enroll(setup_test_app(pool.clone()).await, &student_token, course_id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Already registered for this course");
}

#[sqlx::test(migrations = "./migrations")]
async fn dropping_without_registration_is_a_bad_request(pool: PgPool) {
    let teacher_email = unique_email("teacher");
    let student_email = unique_email("student");
    let password = "testpass123";

    let mut tx = pool.begin().await.unwrap();
    let teacher_id = create_teacher(&mut tx, &teacher_email, password).await;
    create_student(&mut tx, &student_email, password).await;
    let course_id = create_course(&mut tx, teacher_id, "CHM301", 1).await;
    tx.commit().await.unwrap();

    let student_token =
        get_auth_token(setup_test_app(pool.clone()).await, &student_email, password).await;

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/enrollments/{course_id}"))
                .header("authorization", format!("Bearer {student_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Not registered for this course"
    );
}
