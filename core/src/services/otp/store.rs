//! Keyed storage for pending passcode records.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::entities::otp_record::OtpRecord;

/// Keyed store holding at most one pending record per recipient.
///
/// The store is injected at engine construction rather than held as a
/// process-wide singleton, so tests stay isolated and a multi-process
/// deployment can swap in an externalized keyed cache without touching
/// call sites.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Fetch the pending record for a recipient, if any
    async fn get(&self, recipient: &str) -> Option<OtpRecord>;

    /// Insert or overwrite the record for a recipient
    async fn insert(&self, record: OtpRecord);

    /// Remove the record for a recipient
    async fn remove(&self, recipient: &str);

    /// Remove every expired record, returning how many were dropped
    async fn sweep_expired(&self) -> usize;
}

/// In-memory store backed by a `HashMap`, suitable for a single process
#[derive(Default)]
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl InMemoryOtpStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending records currently held
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn get(&self, recipient: &str) -> Option<OtpRecord> {
        self.records.lock().await.get(recipient).cloned()
    }

    async fn insert(&self, record: OtpRecord) {
        self.records
            .lock()
            .await
            .insert(record.recipient.clone(), record);
    }

    async fn remove(&self, recipient: &str) {
        self.records.lock().await.remove(recipient);
    }

    async fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at >= now);
        before - records.len()
    }
}
