//! Environment configuration for the CMS client.

use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub api_url: String,
    /// Prefix for relative upload paths (images, videos) returned by the API.
    pub asset_base_url: String,
    pub request_timeout: Duration,
    /// Zero turns the read cache off.
    pub cache_ttl: Duration,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_STRAPI_URL.to_string(),
            asset_base_url: DEFAULT_STRAPI_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl CmsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("STRAPI_URL").unwrap_or(DEFAULT_STRAPI_URL.to_string());
        let asset_base_url = lookup("STRAPI_ASSET_URL").unwrap_or(api_url.clone());
        let request_timeout = match lookup("STRAPI_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().context("STRAPI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let cache_ttl = match lookup("STRAPI_CACHE_TTL_SECS") {
            Some(v) => v.parse::<u64>().context("STRAPI_CACHE_TTL_SECS must be a whole number of seconds")?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            asset_base_url: asset_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(request_timeout),
            cache_ttl: Duration::from_secs(cache_ttl),
        })
    }
}
