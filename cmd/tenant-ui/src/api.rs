use dioxus::prelude::*;
use pkg_console::{LookupError, SaveError};
use pkg_types::{QuotaSettings, TenantId, TenantRecord};

// ============================================================
// Server functions: run on the server, called from the WASM client
// ============================================================

/// `None` when the tenant API has no such tenant.
#[get("/api/ui/tenants?id")]
pub async fn get_tenant(id: String) -> Result<Option<TenantRecord>> {
    use pkg_console::{TenantLookup, http::HttpTenantClient};

    let tenant = TenantId::parse(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = HttpTenantClient::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    match client.lookup(&tenant).await {
        Ok(record) => Ok(Some(record)),
        Err(LookupError::NotFound) => Ok(None),
        Err(LookupError::Transport(e)) => {
            tracing::warn!("Tenant lookup for {} failed: {}", tenant, e);
            Err(ServerFnError::new(e).into())
        }
    }
}

/// `Some(reason)` when the tenant API refused the override.
#[post("/api/ui/tenants/workspace-quota")]
pub async fn save_workspace_quota(id: String, settings: QuotaSettings) -> Result<Option<String>> {
    use pkg_console::{QuotaSettingsStore, http::HttpTenantClient};

    let tenant = TenantId::parse(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = HttpTenantClient::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    match client.save_quota_settings(&tenant, &settings).await {
        Ok(()) => Ok(None),
        Err(SaveError::NotFound) => Ok(Some(pkg_constants::messages::TENANT_NOT_FOUND.to_string())),
        Err(SaveError::Rejected(reason)) => Ok(Some(reason)),
        Err(SaveError::Transport(e)) => {
            tracing::warn!("Saving workspace quota for {} failed: {}", tenant, e);
            Err(ServerFnError::new(e).into())
        }
    }
}

// ============================================================
// Client-side adapters into the console's error model
// ============================================================

pub async fn lookup_tenant(tenant: &TenantId) -> std::result::Result<TenantRecord, LookupError> {
    match get_tenant(tenant.to_string()).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(LookupError::NotFound),
        Err(e) => Err(LookupError::Transport(e.to_string())),
    }
}

pub async fn store_workspace_quota(
    tenant: &TenantId,
    settings: &QuotaSettings,
) -> std::result::Result<(), SaveError> {
    match save_workspace_quota(tenant.to_string(), *settings).await {
        Ok(None) => Ok(()),
        Ok(Some(reason)) => Err(SaveError::Rejected(reason)),
        Err(e) => Err(SaveError::Transport(e.to_string())),
    }
}
