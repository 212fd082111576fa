//! Snapshot-keyed aggregate cache.
//!
//! Aggregates are rebuilt from scratch whenever a roster snapshot is seen for
//! the first time and reused for every later query against the same snapshot.
//! Keys are snapshot identities, not content hashes: a new snapshot always
//! means a fresh aggregation pass.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use occupancy_core::SnapshotId;
use occupancy_roster::{OverallAggregate, RosterSnapshot, aggregate_snapshot};

#[derive(Debug, Clone)]
struct CachedAggregate {
    aggregate: Arc<OverallAggregate>,
    built_at: DateTime<Utc>,
}

/// Hit/miss counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded map from snapshot id to its aggregate.
///
/// Eviction is oldest-inserted first once `capacity` is exceeded.
#[derive(Debug)]
pub struct AggregateCache {
    capacity: usize,
    entries: HashMap<SnapshotId, CachedAggregate>,
    order: VecDeque<SnapshotId>,
    hits: u64,
    misses: u64,
}

impl AggregateCache {
    /// `capacity` is clamped to at least one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Aggregate for `snapshot`, computing it only on the first request.
    pub fn get_or_build(&mut self, snapshot: &RosterSnapshot) -> Arc<OverallAggregate> {
        let id = snapshot.id();
        if let Some(entry) = self.entries.get(&id) {
            self.hits += 1;
            tracing::trace!(snapshot = %id, "aggregate cache hit");
            return Arc::clone(&entry.aggregate);
        }

        self.misses += 1;
        let aggregate = Arc::new(aggregate_snapshot(snapshot));
        tracing::debug!(
            snapshot = %id,
            records = snapshot.record_count(),
            total = aggregate.total(),
            "aggregate cache miss; built aggregate"
        );

        self.insert(id, Arc::clone(&aggregate));
        aggregate
    }

    pub fn get(&self, id: SnapshotId) -> Option<Arc<OverallAggregate>> {
        self.entries.get(&id).map(|e| Arc::clone(&e.aggregate))
    }

    /// When the aggregate for `id` was built, if it is cached.
    pub fn built_at(&self, id: SnapshotId) -> Option<DateTime<Utc>> {
        self.entries.get(&id).map(|e| e.built_at)
    }

    /// Drop the aggregate for `id`. Returns whether one was cached.
    pub fn invalidate(&mut self, id: SnapshotId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            self.order.retain(|k| *k != id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    fn insert(&mut self, id: SnapshotId, aggregate: Arc<OverallAggregate>) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            tracing::debug!(snapshot = %oldest, "evicted cached aggregate");
        }

        self.entries.insert(
            id,
            CachedAggregate {
                aggregate,
                built_at: Utc::now(),
            },
        );
        self.order.push_back(id);
    }
}
