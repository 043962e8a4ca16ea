use axum::{
    Json,
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::IntoResponse,
};
use pkg_console::QuotaSettingsDraft;
use pkg_constants::messages::TENANT_NOT_FOUND;
use pkg_types::{QuotaSettings, TenantId};
use tracing::{info, warn};

use crate::AppState;

// ============================================================
// Tenants
// ============================================================

pub async fn get_tenant(
    State(state): State<AppState>,
    AxumPath(raw_id): AxumPath<String>,
) -> impl IntoResponse {
    let id = match TenantId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    match state.registry.get(&id).await {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => {
            info!("Tenant {} not found", id);
            (StatusCode::NOT_FOUND, TENANT_NOT_FOUND).into_response()
        }
    }
}

// ============================================================
// Personal workspace quota override
// ============================================================

pub async fn put_workspace_quota(
    State(state): State<AppState>,
    AxumPath(raw_id): AxumPath<String>,
    Json(settings): Json<QuotaSettings>,
) -> impl IntoResponse {
    let id = match TenantId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    // Same rule the console applies before submitting
    if let Err(errors) = QuotaSettingsDraft::from(settings).validate() {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        warn!("Rejected workspace quota for {}: {}", id, message);
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    match state.registry.set_workspace_quota(&id, settings).await {
        Some(record) => {
            info!(
                "Updated workspace quota for {} (enabled={})",
                id, settings.enabled
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        None => (StatusCode::NOT_FOUND, TENANT_NOT_FOUND).into_response(),
    }
}
