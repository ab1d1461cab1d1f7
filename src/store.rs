//! In-memory URL store and short ID derivation
//!
//! Short IDs are content-addressed: the same URL always maps to the same ID,
//! so re-shortening a URL rewrites its existing slot. Two different URLs may
//! share an ID; the later write wins and nothing reports it.

use dashmap::DashMap;
use md5::{Digest, Md5};
use std::sync::Arc;

use crate::error::AppError;
use crate::model::UrlRecord;

/// Number of hex characters kept from the digest
pub const SHORT_ID_LEN: usize = 6;

/// Derives the short ID for a URL
///
/// Hashes the raw bytes of `original_url` with MD5 and keeps the first
/// [`SHORT_ID_LEN`] characters of the lowercase hex digest. Used as a short
/// content key only, not for anything security related.
///
/// # Example
///
/// ```
/// # use shorturl::store::generate_short_id;
/// assert_eq!(generate_short_id("hello"), "5d4140");
/// ```
pub fn generate_short_id(original_url: &str) -> String {
    let digest = Md5::digest(original_url.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(SHORT_ID_LEN);
    id
}

/// Thread-safe mapping from short ID to [`UrlRecord`]
///
/// Records live only as long as the process. The map is sharded and locked
/// internally, so a single instance can be shared across handlers.
#[derive(Debug, Default)]
pub struct UrlStore {
    records: DashMap<String, UrlRecord>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `original_url` under its derived ID and returns the ID
    ///
    /// Any record already held under that ID is replaced, which refreshes
    /// `creation_date` for a repeated URL and silently overwrites on a
    /// collision.
    pub fn put(&self, original_url: &str) -> String {
        let id = generate_short_id(original_url);
        let record = UrlRecord::new(id.clone(), original_url.to_string());

        match self.records.insert(id.clone(), record) {
            Some(previous) if previous.original_url != original_url => {
                tracing::debug!(
                    id = %id,
                    previous = %previous.original_url,
                    "short id reassigned to a different URL"
                );
            }
            Some(_) => tracing::debug!(id = %id, "short id refreshed"),
            None => tracing::debug!(id = %id, "short id created"),
        }

        id
    }

    /// Returns a copy of the record stored under `id`
    pub fn get(&self, id: &str) -> Result<UrlRecord, AppError> {
        self.records
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Application state shared across all request handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<UrlStore>,
}

impl AppState {
    pub fn new(store: UrlStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
