use serde::{Deserialize, Serialize};

use crate::quota::{InstanceUsage, QuotaSettings, ResourceQuota};
use crate::tenant::{TenantId, TenantRecord};

/// Tenant API server configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// port: 7480
/// bind: 0.0.0.0
/// tenants-file: /etc/tenant-console/tenants.yaml
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigFile {
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default, alias = "tenants-file")]
    pub tenants_file: Option<String>,
}

/// Seed file for the tenant registry (YAML).
///
/// Example `tenants.yaml`:
/// ```yaml
/// tenants:
///   - id: s123456
///     display-name: Jane Doe
///     workspace-quota: { cpu: 8, memory: 16, instances: 4 }
///     instances:
///       - { name: vm-1, cpu: 2, memory: 4 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantsFile {
    #[serde(default)]
    pub tenants: Vec<TenantSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantSeed {
    pub id: TenantId,
    #[serde(default, alias = "display-name")]
    pub display_name: Option<String>,
    #[serde(default, alias = "workspace-quota")]
    pub workspace_quota: Option<ResourceQuota>,
    #[serde(default)]
    pub instances: Vec<InstanceUsage>,
    #[serde(default, alias = "personal-workspace")]
    pub personal_workspace: Option<QuotaSettings>,
}

impl TenantSeed {
    /// Build the record served by lookups; usage is derived from the instances.
    pub fn into_record(self) -> TenantRecord {
        TenantRecord {
            consumed_quota: Some(ResourceQuota::consumed_by(&self.instances)),
            id: self.id,
            display_name: self.display_name,
            workspace_quota: self.workspace_quota,
            personal_workspace: self.personal_workspace,
        }
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_default() {
        let cfg: ServerConfigFile = load_config_file("/nonexistent/tenant-console.yaml").unwrap();
        assert!(cfg.port.is_none());
        assert!(cfg.tenants_file.is_none());
    }

    #[test]
    fn server_config_accepts_kebab_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 9000\nbind: 127.0.0.1\ntenants-file: /tmp/t.yaml").unwrap();
        let cfg: ServerConfigFile = load_config_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.port, Some(9000));
        assert_eq!(cfg.bind.as_deref(), Some("127.0.0.1"));
        assert_eq!(cfg.tenants_file.as_deref(), Some("/tmp/t.yaml"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: [not, a, port]").unwrap();
        let res: anyhow::Result<ServerConfigFile> = load_config_file(file.path().to_str().unwrap());
        assert!(res.is_err());
    }

    #[test]
    fn seed_derives_consumed_quota() {
        let yaml = r#"
tenants:
  - id: " S123456 "
    display-name: Jane Doe
    workspace-quota: { cpu: 8, memory: 16, instances: 4 }
    instances:
      - { name: vm-1, cpu: 2, memory: 4 }
      - { name: vm-2, cpu: 1, memory: 2.5 }
      - { name: vm-3, cpu: 4, memory: 8, running: false }
"#;
        let file: TenantsFile = serde_yaml::from_str(yaml).unwrap();
        let record = file.tenants.into_iter().next().unwrap().into_record();
        assert_eq!(record.id.as_str(), "s123456");
        assert_eq!(record.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.consumed_quota, Some(ResourceQuota::new(3.0, 6.5, 2.0)));
        assert_eq!(record.workspace_quota, Some(ResourceQuota::new(8.0, 16.0, 4.0)));
        assert!(record.personal_workspace.is_none());
    }
}
