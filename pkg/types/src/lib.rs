//! Shared data model for the tenant console: tenant identity, quota records,
//! the personal-workspace override payload and config file types.

pub mod config;
pub mod quota;
pub mod tenant;
pub mod validate;

pub use quota::{QuotaSettings, ResourceQuota};
pub use tenant::{TenantId, TenantRecord};
