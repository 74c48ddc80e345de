use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::customer::{
    repo::{InMemoryCustomerDao, SeaOrmCustomerDao},
    CustomerDao,
};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`) when present, else environment only.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let cfg = if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    };
    cfg.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Construct the storage provider named by `storage.backend`.
pub async fn build_customer_dao(cfg: &AppConfig) -> Result<Arc<dyn CustomerDao>, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            let dao = if cfg.storage.seed_demo_data {
                InMemoryCustomerDao::with_seed_data()
            } else {
                InMemoryCustomerDao::new()
            };
            info!(backend = "memory", seeded = cfg.storage.seed_demo_data, "customer storage ready");
            Ok(Arc::new(dao))
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Database(e.to_string()))?;
                info!("migrations applied");
            }
            info!(backend = "database", "customer storage ready");
            Ok(Arc::new(SeaOrmCustomerDao::new(db)))
        }
    }
}

/// Build the router for the configured storage provider.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repo = build_customer_dao(cfg).await?;
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting customer server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
