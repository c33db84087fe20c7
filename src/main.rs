use dotenvy::dotenv;

use gradebook::logging::init_tracing;
use gradebook::router::init_router;
use gradebook::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind listener");
    println!("Server running on http://localhost:{port}");
    println!("API docs at http://localhost:{port}/swagger-ui");
    axum::serve(listener, app).await.expect("Server error");
}

async fn handle_create_admin(args: Vec<String>) {
    if args.len() < 6 || args.len() > 7 {
        eprintln!(
            "Usage: {} create-admin <first_name> <last_name> <email> <password> [designation]",
            args[0]
        );
        std::process::exit(1);
    }

    let designation = args.get(6).map(String::as_str);

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match gradebook::cli::create_admin(&pool, &args[2], &args[3], &args[4], &args[5], designation)
        .await
    {
        Ok(admin) => {
            println!("Admin created successfully");
            println!("   Email: {}", admin.email);
            println!("   Name: {} {}", admin.first_name, admin.last_name);
        }
        Err(e) => {
            eprintln!("Error creating admin: {:?}", e);
            std::process::exit(1);
        }
    }
}
