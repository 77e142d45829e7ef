//! Process entry point shared by the two binaries.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ApiVariant, ServerConfig};
use crate::router::build_app_router;
use crate::state::AppState;

const DEFAULT_LOG_FILTER: &str = "archivist_api=debug,archivist_db=debug,tower_http=debug";

/// Load configuration, prepare the database and serve `variant` until a
/// shutdown signal arrives.
pub async fn run(variant: ApiVariant) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env(variant).context("Invalid configuration")?;
    tracing::info!(
        service = variant.service_name(),
        host = %config.host,
        port = config.port,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = archivist_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;
    tracing::info!("Database connection pool created");

    archivist_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    archivist_db::run_migrations(&pool, variant.schema())
        .await
        .context("Failed to run database migrations")?;
    tracing::info!(schema = variant.schema().name(), "Database migrations applied");

    if config.seed_on_startup {
        archivist_db::seed_if_empty(&pool, variant.schema())
            .await
            .context("Failed to seed database")?;
    }

    // --- Router ---
    let addr = SocketAddr::new(
        config.host.parse().context("HOST must be an IP address")?,
        config.port,
    );
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        variant,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to
/// line-delimited JSON output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
