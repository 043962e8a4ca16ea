use async_trait::async_trait;
use pkg_types::{QuotaSettings, TenantId, TenantRecord};

use crate::error::{LookupError, SaveError};

/// Resolves a tenant identifier to its record.
/// Implementations own transport, auth, caching and timeouts.
#[async_trait]
pub trait TenantLookup: Send + Sync {
    async fn lookup(&self, tenant: &TenantId) -> Result<TenantRecord, LookupError>;
}

/// Stores a validated personal-workspace override for a tenant.
#[async_trait]
pub trait QuotaSettingsStore: Send + Sync {
    async fn save_quota_settings(
        &self,
        tenant: &TenantId,
        settings: &QuotaSettings,
    ) -> Result<(), SaveError>;
}
