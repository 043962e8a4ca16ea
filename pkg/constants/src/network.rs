//! Network-related constants.

/// Default port for the tenant API server.
pub const DEFAULT_API_PORT: u16 = 7480;

/// Default bind address for the tenant API server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default tenant API base URL (HTTP), used by the console when
/// `TENANT_API_ENV` is not set.
pub const DEFAULT_API_ADDR: &str = "http://127.0.0.1:7480";

/// Environment variable overriding the tenant API base URL.
pub const TENANT_API_ENV: &str = "TENANT_API_URL";

/// Default timeout for a single request to the tenant API, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Health check path of the tenant API.
pub const HEALTH_PATH: &str = "/healthz";

/// Path prefix of the tenant resource.
pub const TENANTS_PATH: &str = "/api/v1/tenants";

/// Path suffix of the personal-workspace quota override below a tenant.
pub const WORKSPACE_QUOTA_SUFFIX: &str = "workspace-quota";
