use pkg_types::config::{TenantsFile, load_config_file};
use pkg_types::{QuotaSettings, TenantId, TenantRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// In-memory tenant directory served by the API.
#[derive(Clone, Default)]
pub struct TenantRegistry {
    tenants: Arc<RwLock<HashMap<TenantId, TenantRecord>>>,
}

impl TenantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from a parsed seed file. Later duplicates win.
    pub fn from_seed(file: TenantsFile) -> Self {
        let mut tenants = HashMap::new();
        for seed in file.tenants {
            let record = seed.into_record();
            if tenants.contains_key(&record.id) {
                warn!("Duplicate tenant {} in seed file, keeping the last one", record.id);
            }
            tenants.insert(record.id.clone(), record);
        }
        Self {
            tenants: Arc::new(RwLock::new(tenants)),
        }
    }

    /// Load a YAML seed file; a missing file yields an empty registry.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let file: TenantsFile = load_config_file(path)?;
        info!("Loaded {} tenant(s) from {}", file.tenants.len(), path);
        Ok(Self::from_seed(file))
    }

    pub async fn get(&self, id: &TenantId) -> Option<TenantRecord> {
        self.tenants.read().await.get(id).cloned()
    }

    pub async fn insert(&self, record: TenantRecord) {
        self.tenants.write().await.insert(record.id.clone(), record);
    }

    pub async fn len(&self) -> usize {
        self.tenants.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tenants.read().await.is_empty()
    }

    /// Replace the stored personal-workspace override. Returns the updated
    /// record, or `None` for an unknown tenant.
    pub async fn set_workspace_quota(
        &self,
        id: &TenantId,
        settings: QuotaSettings,
    ) -> Option<TenantRecord> {
        let mut tenants = self.tenants.write().await;
        let record = tenants.get_mut(id)?;
        record.personal_workspace = Some(settings);
        Some(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::ResourceQuota;
    use std::io::Write;

    fn id(s: &str) -> TenantId {
        TenantId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
tenants:
  - id: S1
    workspace-quota: {{ cpu: 4, memory: 8, instances: 2 }}
    instances:
      - {{ name: vm-1, cpu: 1, memory: 2 }}
  - id: s2
"#
        )
        .unwrap();

        let registry = TenantRegistry::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(registry.len().await, 2);
        let s1 = registry.get(&id("s1")).await.unwrap();
        assert_eq!(s1.consumed_quota, Some(ResourceQuota::new(1.0, 2.0, 1.0)));
        assert_eq!(s1.workspace_quota, Some(ResourceQuota::new(4.0, 8.0, 2.0)));
    }

    #[tokio::test]
    async fn missing_seed_file_is_empty() {
        let registry = TenantRegistry::load("/nonexistent/tenants.yaml").unwrap();
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn set_workspace_quota_updates_known_tenants_only() {
        let registry = TenantRegistry::new();
        registry.insert(TenantRecord::new(id("s1"))).await;

        let settings = QuotaSettings {
            enabled: true,
            cpu: Some(2.0),
            memory: Some(4.0),
            instances: Some(1.0),
        };
        let updated = registry.set_workspace_quota(&id("s1"), settings).await.unwrap();
        assert_eq!(updated.personal_workspace, Some(settings));
        assert_eq!(
            registry.get(&id("s1")).await.unwrap().personal_workspace,
            Some(settings)
        );

        assert!(registry.set_workspace_quota(&id("nobody"), settings).await.is_none());
    }
}
