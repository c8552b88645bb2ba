use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use skripsi::logging::init_tracing;
use skripsi::router::init_router;
use skripsi::state::AppState;
use skripsi::store::PgStore;
use skripsi_config::AppConfig;
use skripsi_db::init_db_pool;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let config = AppConfig::from_env();
    let _log_guard = init_tracing(&config.logging);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server exited with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    if config.jwt.using_development_secret {
        warn!("JWT_SECRET is not set; using the development signing key");
    } else if config.jwt.secret.is_none() {
        error!("JWT_SECRET is not set in production; every token will be rejected");
    }

    let pool = init_db_pool(&config.database).await?;
    let store = PgStore::new(pool, config.database.query_timeout);
    let state = AppState::from_config(Arc::new(store), &config);
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, environment = ?config.environment, "Server listening");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
