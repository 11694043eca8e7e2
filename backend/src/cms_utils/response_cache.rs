//! Short-lived in-memory cache for CMS reads, keyed by request URL digest.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

#[derive(Debug)]
struct CachedResponse {
    body: String,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: RwLock::new(HashMap::new()) }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn key_for(url: &str) -> String {
        sha256::digest(url.to_string())
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(entry.body.clone())
    }

    pub async fn insert(&self, key: String, body: String) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, e| e.stored_at.elapsed() <= ttl);
        entries.insert(key, CachedResponse { body, stored_at: Instant::now() });
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
