use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use userinfo::api::{AppState, build_router};
use userinfo::core::config::AppConfig;
use userinfo::infrastructure::persistence::{self, MySqlUserStore};

#[tokio::main]
async fn main() -> ExitCode {
    userinfo::setup_logging();

    match run().await {
        Ok(()) => {
            info!("userinfo-api stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "userinfo-api failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    info!(config = ?config, "Starting userinfo-api");

    let store = Arc::new(MySqlUserStore::connect_lazy(&config.database));
    persistence::wait_until_ready(store.as_ref(), config.database.connect_retries)
        .await
        .context("connecting to MySQL")?;

    let state = AppState::new(store.clone(), config.min_password_length);
    let app = build_router(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
