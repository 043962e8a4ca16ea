use anyhow::{Context, bail};
use async_trait::async_trait;
use pkg_constants::network::{
    DEFAULT_API_ADDR, DEFAULT_REQUEST_TIMEOUT_SECS, TENANT_API_ENV, TENANTS_PATH,
    WORKSPACE_QUOTA_SUFFIX,
};
use pkg_types::{QuotaSettings, TenantId, TenantRecord};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::client::{QuotaSettingsStore, TenantLookup};
use crate::error::{LookupError, SaveError};

/// Tenant API client implementing both console collaborators over HTTP.
#[derive(Clone)]
pub struct HttpTenantClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTenantClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid tenant API URL {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Tenant API URL {} cannot carry a path", base_url);
        }
        Ok(Self { client, base_url })
    }

    /// Client for `$TENANT_API_URL`, falling back to the local default.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var(TENANT_API_ENV).unwrap_or_else(|_| DEFAULT_API_ADDR.to_string());
        info!("Tenant API endpoint: {}", base_url);
        Self::new(&base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/v1/tenants/<id>[/<suffix>]`, each part pushed as its own
    /// encoded path segment.
    fn tenant_url(&self, tenant: &TenantId, suffix: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(TENANTS_PATH.split('/').filter(|s| !s.is_empty()));
            segments.push(tenant.as_str());
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        url
    }
}

#[async_trait]
impl TenantLookup for HttpTenantClient {
    async fn lookup(&self, tenant: &TenantId) -> Result<TenantRecord, LookupError> {
        let url = self.tenant_url(tenant, None);
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            status if !status.is_success() => Err(LookupError::Transport(format!(
                "server returned {}",
                status
            ))),
            _ => resp
                .json()
                .await
                .map_err(|e| LookupError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl QuotaSettingsStore for HttpTenantClient {
    async fn save_quota_settings(
        &self,
        tenant: &TenantId,
        settings: &QuotaSettings,
    ) -> Result<(), SaveError> {
        let url = self.tenant_url(tenant, Some(WORKSPACE_QUOTA_SUFFIX));
        debug!("PUT {}", url);
        let resp = self
            .client
            .put(url)
            .json(settings)
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => SaveError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => SaveError::Rejected(body),
            _ => SaveError::Transport(format!("server returned {}", status)),
        })
    }
}
