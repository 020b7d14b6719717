use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use eticket_server::config::Config;
use eticket_server::routes::create_routes;
use eticket_server::state::AppState;
use eticket_server::store::PostgresStore;
use eticket_server::utils::clock::SystemClock;
use eticket_server::utils::logger::init_logger;
use eticket_server::verification::VerificationService;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logger();

    let config = Config::from_env().expect("Invalid configuration");
    let addr = config.socket_addr().expect("Invalid bind address");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let store = Arc::new(PostgresStore::new(pool));
    let service = VerificationService::with_store(store, Arc::new(SystemClock));
    let app: Router = create_routes(AppState::new(service), &config);

    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
