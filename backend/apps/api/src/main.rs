//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use contest::{ContestConfig, PgContestRepository, contest_router};
use identity::{IdentityConfig, PgIdentityRepository, auth_router, user_router};
use platform::payment::PaymentClient;
use sqlx::postgres::PgPoolOptions;
use task::{PgTaskRepository, task_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod payments;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,identity=info,contest=info,task=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration
    let identity_config = if cfg!(debug_assertions) {
        IdentityConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        IdentityConfig {
            token_secret: secret,
            ..IdentityConfig::default()
        }
    };
    let identity_config = Arc::new(identity_config);
    let contest_config = Arc::new(ContestConfig::default());

    // Repositories
    let users = Arc::new(PgIdentityRepository::new(pool.clone()));
    let contests = Arc::new(PgContestRepository::new(pool.clone()));
    let tasks = Arc::new(PgTaskRepository::new(pool.clone()));

    // Payment provider
    let stripe_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();
    if stripe_key.is_empty() {
        tracing::warn!("STRIPE_SECRET_KEY not set, payment intents will fail");
    }
    let payment_client = PaymentClient::new(stripe_key);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest(
            "/api/auth",
            auth_router(Arc::clone(&users), Arc::clone(&identity_config)),
        )
        .nest(
            "/api/users",
            user_router(Arc::clone(&users), Arc::clone(&identity_config)),
        )
        .nest(
            "/api/contests",
            contest_router(
                Arc::clone(&contests),
                Arc::clone(&users),
                Arc::clone(&contest_config),
                Arc::clone(&identity_config),
            ),
        )
        .nest(
            "/api/tasks",
            task_router(
                Arc::clone(&tasks),
                Arc::clone(&users),
                Arc::clone(&identity_config),
            ),
        )
        .nest("/api/payments", payments::payment_router(payment_client))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(31113);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
