//! Operator-facing message texts.

/// Shown when the tenant search is submitted with a blank identifier.
pub const TENANT_ID_REQUIRED: &str = "ID required";

/// Shown when a lookup resolves to no tenant.
pub const TENANT_NOT_FOUND: &str = "Tenant not found";

/// Prefix for lookup transport failures; the detail follows.
pub const SEARCH_FAILED: &str = "Search failed";

/// Prefix for persistence failures; the detail follows.
pub const SAVING_FAILED: &str = "Saving failed";
