use axum::{
    Router, middleware,
    routing::{get, put},
};
use pkg_constants::network::{HEALTH_PATH, TENANTS_PATH, WORKSPACE_QUOTA_SUFFIX};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::AppState;
use crate::handlers::{health, tenants};
use crate::registry::TenantRegistry;
use crate::request_id::request_id_middleware;

/// Server configuration passed from the binary's CLI.
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub tenants_file: String,
}

/// Route table of the tenant API.
pub fn router(state: AppState) -> Router {
    let tenant = format!("{}/{{id}}", TENANTS_PATH);
    let workspace_quota = format!("{}/{}", tenant, WORKSPACE_QUOTA_SUFFIX);

    Router::new()
        .route(HEALTH_PATH, get(health::healthz))
        .route(&tenant, get(tenants::get_tenant))
        .route(&workspace_quota, put(tenants::put_workspace_quota))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let registry = TenantRegistry::load(&config.tenants_file)?;
    if registry.is_empty().await {
        info!("No tenants seeded from {}", config.tenants_file);
    }

    let app = router(AppState { registry });

    info!("Starting tenant API server on {}", config.addr);
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
