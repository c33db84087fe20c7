mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::unique_email;
use gradebook::config::cors::CorsConfig;
use gradebook::config::jwt::JwtConfig;
use gradebook::router::init_router;
use gradebook::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

async fn register(app: axum::Router, email: &str, password: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "first_name": "Grace",
                    "last_name": "Hopper",
                    "email": email,
                    "password": password
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn registration_issues_an_admission_number(pool: PgPool) {
    let email = unique_email("student");

    let response = register(setup_test_app(pool.clone()).await, &email, "testpass123").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["role"], "student");
    assert!(
        body["details"]["admission_number"]
            .as_str()
            .unwrap()
            .starts_with("STU@")
    );
    assert_eq!(body["password"], Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_registration_conflicts(pool: PgPool) {
    let email = unique_email("student");

    let response = register(setup_test_app(pool.clone()).await, &email, "testpass123").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = register(setup_test_app(pool.clone()).await, &email, "otherpass456").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        json_body(response).await["error"],
        format!("A user with email {email} already exists")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn login_then_refresh_rotates_the_token_pair(pool: PgPool) {
    let email = unique_email("student");
    let password = "testpass123";

    let response = register(setup_test_app(pool.clone()).await, &email, password).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "email": email, "password": password }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login = json_body(response).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let response = setup_test_app(pool.clone())
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/refresh")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "refresh_token": refresh_token }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tokens = json_body(response).await;
    assert!(tokens["access_token"].as_str().is_some());
    assert!(tokens["refresh_token"].as_str().is_some());
}
