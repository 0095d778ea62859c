//! Concurrent subscriber-type-to-handler-index cache with hit/miss
//! accounting.

use crate::descriptor::HandlerDescriptor;
use crate::types::SubscriberType;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Point-in-time view of cache activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub cached_types: usize,
    pub last_store_at: Option<DateTime<Utc>>,
}

impl CacheStatsSnapshot {
    /// Hit ratio in `[0.0, 1.0]`; 0.0 before any lookup has happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Maps a subscriber type to its finalized handler index.
///
/// Stores are atomic per key; racing writers for the same key produce
/// identical values, so last-writer-wins is benign. Counters are relaxed,
/// they only feed diagnostics.
#[derive(Debug, Default)]
pub(crate) struct MethodIndexCache {
    entries: DashMap<SubscriberType, Arc<[HandlerDescriptor]>>,
    hits: AtomicU64,
    misses: AtomicU64,
    last_store_at: Mutex<Option<DateTime<Utc>>>,
}

impl MethodIndexCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lookup(&self, subscriber: SubscriberType) -> Option<Arc<[HandlerDescriptor]>> {
        let found = self
            .entries
            .get(&subscriber)
            .map(|entry| Arc::clone(entry.value()));
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    pub(crate) fn store(&self, subscriber: SubscriberType, handlers: Arc<[HandlerDescriptor]>) {
        self.entries.insert(subscriber, handlers);
        *self.last_store_at.lock() = Some(Utc::now());
    }

    /// Drop every entry; counters keep accumulating across clears.
    pub(crate) fn clear(&self) {
        self.entries.clear();
    }

    pub(crate) fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            cached_types: self.entries.len(),
            last_store_at: *self.last_store_at.lock(),
        }
    }
}
