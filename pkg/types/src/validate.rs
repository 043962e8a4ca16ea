use anyhow::{Result, bail};
use pkg_constants::messages::TENANT_ID_REQUIRED;

/// Normalize a raw tenant identifier: surrounding whitespace trimmed, lower-cased.
pub fn normalize_tenant_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate an already-normalized tenant identifier.
/// Rules: non-empty, at most 63 characters, only `[a-z0-9.-]`, and no
/// leading or trailing `.`/`-`. The id is used verbatim as a URL path segment.
pub fn validate_tenant_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!(TENANT_ID_REQUIRED);
    }
    if id.len() > 63 {
        bail!("tenant id '{}' exceeds 63 characters (got {})", id, id.len());
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        bail!(
            "tenant id '{}' must contain only lowercase letters, digits, '.' and '-'",
            id
        );
    }
    if id.starts_with(['-', '.']) || id.ends_with(['-', '.']) {
        bail!("tenant id '{}' must not start or end with '.' or '-'", id);
    }
    Ok(())
}
