//! HTTP access to the Strapi content API.

use std::sync::OnceLock;

use common::contact::{FieldError, SubmissionError};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::cms_utils::asset_url::resolve_asset_url;
use crate::cms_utils::response_cache::ResponseCache;
use crate::config::CmsConfig;
use crate::error::CatalogError;

/// Strapi's default page size is 25; the site shows whole collections.
pub const COLLECTION_PAGE_SIZE: u32 = 100;

#[derive(Debug, Serialize, Deserialize)]
pub struct StrapiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: StrapiMeta,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct StrapiMeta {
    pub pagination: Option<StrapiPagination>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StrapiPagination {
    pub page: u64,
    pub page_size: u64,
    pub page_count: u64,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct StrapiMedia {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct StrapiErrorBody {
    pub error: StrapiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct StrapiErrorDetail {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<StrapiErrorDetails>,
}

#[derive(Debug, Deserialize, Default)]
pub struct StrapiErrorDetails {
    #[serde(default)]
    pub errors: Vec<StrapiFieldError>,
}

#[derive(Debug, Deserialize)]
pub struct StrapiFieldError {
    #[serde(default)]
    pub path: Vec<String>,
    pub message: String,
}

impl StrapiErrorBody {
    /// Field-level messages when Strapi reports them, the generic message otherwise.
    pub fn into_submission_error(self) -> SubmissionError {
        let field_errors = self
            .error
            .details
            .unwrap_or_default()
            .errors
            .into_iter()
            .map(|e| FieldError::new(e.path.join("."), e.message))
            .collect::<Vec<_>>();
        match field_errors.first() {
            Some(first) => SubmissionError { message: first.message.clone(), field_errors },
            None => SubmissionError::generic(),
        }
    }
}

#[derive(Debug)]
pub struct CmsClient {
    http: reqwest::Client,
    config: CmsConfig,
    cache: ResponseCache,
}

static CMS_CLIENT: OnceLock<CmsClient> = OnceLock::new();

/// Process-wide client built from the environment on first use.
pub fn get_cms_client() -> anyhow::Result<&'static CmsClient> {
    if let Some(client) = CMS_CLIENT.get() {
        return Ok(client);
    }
    let client = CmsClient::new(CmsConfig::from_env()?)?;
    Ok(CMS_CLIENT.get_or_init(|| client))
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .inspect_err(|e| warn!("cannot build CMS http client: {}", e))?;
        let cache = ResponseCache::new(config.cache_ttl);
        Ok(Self { http, config, cache })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    pub fn asset_url(&self, path: &str) -> String {
        resolve_asset_url(&self.config.asset_base_url, path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> Result<T, CatalogError> {
        let request = self.http.get(self.endpoint(path)).query(params).build()?;
        let url = request.url().to_string();
        let cache_key = ResponseCache::key_for(&url);

        if let Some(cached) = self.cache.get(&cache_key).await {
            if let Ok(parsed) = serde_json::from_str::<T>(&cached) {
                debug!("CMS CACHE HIT: {}", url);
                return Ok(parsed);
            }
        }
        debug!("CMS CACHE MISS: {}", url);

        let t0 = std::time::Instant::now();
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        let dt_ms = t0.elapsed().as_millis();
        info!("GET {} -> {} ({}ms, {} bytes)", url, status, dt_ms, body.len());

        if status.is_client_error() || status.is_server_error() {
            warn!("CMS read failed: {} {}", status, url);
            return Err(CatalogError::Server { status: status.as_u16(), body });
        }
        let parsed = serde_json::from_str::<T>(&body)?;
        self.cache.insert(cache_key, body).await;
        Ok(parsed)
    }

    /// POSTs `{data: body}`. A Strapi error body becomes [`CatalogError::Rejected`].
    pub async fn post_data<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, CatalogError> {
        let url = self.endpoint(path);
        let response = self.http.post(&url).json(&serde_json::json!({ "data": body })).send().await?;
        let status = response.status();
        let text = response.text().await?;
        info!("POST {} -> {}", url, status);

        if status.is_client_error() || status.is_server_error() {
            return match serde_json::from_str::<StrapiErrorBody>(&text) {
                Ok(error_body) => Err(CatalogError::Rejected(error_body.into_submission_error())),
                Err(_) => Err(CatalogError::Server { status: status.as_u16(), body: text }),
            };
        }
        Ok(serde_json::from_str::<T>(&text)?)
    }
}

pub fn populate_all() -> Vec<(String, String)> {
    vec![
        ("populate".to_string(), "*".to_string()),
        ("pagination[pageSize]".to_string(), COLLECTION_PAGE_SIZE.to_string()),
    ]
}

/// Warns when a collection was cut off by pagination.
pub fn note_truncation(collection: &str, returned: usize, meta: &StrapiMeta) {
    if let Some(pagination) = &meta.pagination {
        if pagination.total > returned as u64 {
            warn!("{}: showing {} of {} records", collection, returned, pagination.total);
        }
    }
}
