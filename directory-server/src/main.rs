//! directory-server binary

use directory_server::db::PgEmployeeRepository;
use directory_server::{AppState, Config, StorageBackend, build_app};
use sqlx::PgPool;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let (state, pool) = match config.storage {
        StorageBackend::Postgres => {
            let repo = PgEmployeeRepository::connect_lazy(&config.database);
            match repo.ensure_schema().await {
                Ok(()) => tracing::info!(
                    host = %config.database.host,
                    database = %config.database.name,
                    "Database connected"
                ),
                Err(e) => tracing::error!(error = %e, "Database connection failed"),
            }
            let pool = repo.pool().clone();
            (AppState::new(repo), Some(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on restart");
            (AppState::in_memory(), None)
        }
    };

    let app = build_app(state, &config.cors_origins);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("directory-server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("directory-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn close_pool(pool: Option<PgPool>) {
    if let Some(pool) = pool {
        pool.close().await;
    }
}
