use serde::{Deserialize, Serialize};

/// A triple of resource amounts, used both for usage and for allotted capacity.
/// An absent field counts as zero wherever it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuota {
    /// CPU in cores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory in GiB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    /// Number of instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<f64>,
}

impl ResourceQuota {
    pub fn new(cpu: f64, memory: f64, instances: f64) -> Self {
        Self {
            cpu: Some(cpu),
            memory: Some(memory),
            instances: Some(instances),
        }
    }

    /// Usage of a workspace: CPU and memory summed over its running
    /// instances, instance count as the number of running instances.
    pub fn consumed_by(instances: &[InstanceUsage]) -> Self {
        let running: Vec<&InstanceUsage> = instances.iter().filter(|i| i.running).collect();
        Self {
            cpu: Some(running.iter().map(|i| i.cpu).sum()),
            memory: Some(running.iter().map(|i| i.memory).sum()),
            instances: Some(running.len() as f64),
        }
    }
}

/// Resources held by a single instance in a tenant's personal workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceUsage {
    pub name: String,
    /// CPU in cores
    #[serde(default)]
    pub cpu: f64,
    /// Memory in GiB
    #[serde(default)]
    pub memory: f64,
    /// Stopped instances hold no resources
    #[serde(default = "default_running")]
    pub running: bool,
}

fn default_running() -> bool {
    true
}

/// Personal-workspace quota override, exactly as submitted by the settings form
/// and stored by the tenant API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSettings {
    pub enabled: bool,
    #[serde(default)]
    pub cpu: Option<f64>,
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(default)]
    pub instances: Option<f64>,
}
