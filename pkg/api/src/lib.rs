pub mod handlers;
pub mod registry;
pub mod request_id;
pub mod server;

use registry::TenantRegistry;

/// Shared application state injected into all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: TenantRegistry,
}
