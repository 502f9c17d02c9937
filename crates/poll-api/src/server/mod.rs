//! Server setup and initialization
//!
//! Provides the application builder, database wiring, and server runner.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use poll_common::{AppConfig, AppError};
use poll_db::{
    create_pool, run_migrations, PgAdminRepository, PgChoiceRepository, PgPool,
    PgQuestionRepository, PoolConfig, MIGRATIONS_DIR,
};
use poll_service::{SeedService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(create_router(), &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Connect to PostgreSQL, applying migrations when enabled
pub async fn connect_database(config: &poll_common::DatabaseConfig) -> Result<PgPool, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool_config = PoolConfig::new(
        config.url.clone(),
        config.max_connections,
        config.min_connections,
    );
    let pool = create_pool(&pool_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.run_migrations {
        migrate(&pool, config).await?;
    }

    Ok(pool)
}

/// Where migrations are read from: `MIGRATIONS_DIR` if set, else the bundled set
pub fn migrations_dir(config: &poll_common::DatabaseConfig) -> &Path {
    config
        .migrations_dir
        .as_deref()
        .unwrap_or_else(|| Path::new(MIGRATIONS_DIR))
}

/// Apply pending schema migrations
pub async fn migrate(pool: &PgPool, config: &poll_common::DatabaseConfig) -> Result<(), AppError> {
    run_migrations(pool, migrations_dir(config))
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))
}

/// Wire the PostgreSQL repositories into a service context
pub fn pg_service_context(pool: PgPool) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .question_repo(Arc::new(PgQuestionRepository::new(pool.clone())))
        .choice_repo(Arc::new(PgChoiceRepository::new(pool.clone())))
        .admin_repo(Arc::new(PgAdminRepository::new(pool)))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Seed sample data into an empty store
///
/// Failures are logged and never stop the server.
pub async fn seed_on_startup(ctx: &ServiceContext) {
    match SeedService::new(ctx).seed_if_empty().await {
        Ok(Some(report)) => info!(
            questions = report.questions_created,
            choices = report.choices_created,
            "Startup seeding complete"
        ),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Startup seeding failed, continuing without sample data"),
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let pool = connect_database(&config.database).await?;
    let service_context = pg_service_context(pool)?;

    if config.polls.seed_on_startup {
        seed_on_startup(&service_context).await;
    }

    AppState::new(service_context, config)
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
