use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and defaults to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool sized by `DATABASE_MAX_CONNECTIONS`, then applies all
/// pending SeaORM migrations so the schema is current before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Connects to a fresh in-memory SQLite database through `connect_to_database`.
///
/// The schema comes from the migrations rather than the entity definitions, so tests
/// using it see the same indexes and foreign keys as a deployed database.
#[cfg(test)]
pub(crate) async fn connect_to_migrated_test_database() -> Result<DatabaseConnection, AppError> {
    connect_to_database(&Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: String::new(),
        database_max_connections: 1,
    })
    .await
}
