use serde::{Deserialize, Serialize};
use std::fmt;

use crate::quota::{QuotaSettings, ResourceQuota};
use crate::validate::{normalize_tenant_id, validate_tenant_id};

/// Case-insensitive tenant key. Always held in normalized form
/// (trimmed, lower-cased, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Normalize and validate raw operator input.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let id = normalize_tenant_id(raw);
        validate_tenant_id(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantId {
    type Error = anyhow::Error;

    fn try_from(raw: String) -> anyhow::Result<Self> {
        Self::parse(&raw)
    }
}

impl From<TenantId> for String {
    fn from(id: TenantId) -> Self {
        id.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tenant as returned by a lookup. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRecord {
    pub id: TenantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Current usage of the personal workspace
    #[serde(default)]
    pub consumed_quota: Option<ResourceQuota>,
    /// Allotted capacity of the personal workspace
    #[serde(default)]
    pub workspace_quota: Option<ResourceQuota>,
    /// Stored personal-workspace override, if one was ever saved
    #[serde(default)]
    pub personal_workspace: Option<QuotaSettings>,
}

impl TenantRecord {
    pub fn new(id: TenantId) -> Self {
        Self {
            id,
            display_name: None,
            consumed_quota: None,
            workspace_quota: None,
            personal_workspace: None,
        }
    }
}
