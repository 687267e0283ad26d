mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, metrics::Metrics, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let metrics = Metrics::new()?;

    let app = router::router(AppState::new(db, metrics));

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
