//! Filesystem path constants.

// ─── Server ────────────────────────────────────────────────────────────────

/// Default config file path for the tenant API server.
pub const DEFAULT_SERVER_CONFIG: &str = "/etc/tenant-console/config.yaml";

/// Default tenants seed file loaded into the registry at startup.
pub const DEFAULT_TENANTS_FILE: &str = "/etc/tenant-console/tenants.yaml";
