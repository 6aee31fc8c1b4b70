use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// applies every pending SeaORM migration. Migrations already recorded in the
/// migrator's bookkeeping table are skipped, so restarting against an existing
/// database leaves the schema untouched.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Binds the listener and serves the application until Ctrl-C is received.
///
/// # Arguments
/// - `config` - Application configuration containing the listen address
/// - `db` - Connected and migrated database
///
/// # Returns
/// - `Ok(())` - Server shut down gracefully
/// - `Err(AppError::IoErr)` - Failed to bind the address or serve connections
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    let app = router::router(AppState::new(db));

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
