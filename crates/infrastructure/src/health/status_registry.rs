use arc_swap::ArcSwap;
use ferrous_gslb_application::ports::HealthMonitor;
use ferrous_gslb_domain::{HealthSnapshot, RecordId};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::info;

/// Unhealthy record ids as last reported by the external monitor.
///
/// The set is immutable once published; every write swaps in a new set via
/// `ArcSwap`, so a snapshot a request already holds never changes under it.
pub struct HealthStatusRegistry {
    unhealthy: ArcSwap<FxHashSet<RecordId>>,
}

impl HealthStatusRegistry {
    pub fn new() -> Self {
        Self::with_unhealthy(std::iter::empty())
    }

    pub fn with_unhealthy(ids: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            unhealthy: ArcSwap::from_pointee(ids.into_iter().collect()),
        }
    }

    /// Returns `true` if the record was previously considered healthy.
    pub fn mark_unhealthy(&self, id: RecordId) -> bool {
        let mut changed = false;
        self.unhealthy.rcu(|current| {
            let mut next = (**current).clone();
            changed = next.insert(id);
            next
        });
        if changed {
            info!(record_id = id, "Record marked unhealthy");
        }
        changed
    }

    /// Returns `true` if the record was previously considered unhealthy.
    pub fn mark_healthy(&self, id: RecordId) -> bool {
        let mut changed = false;
        self.unhealthy.rcu(|current| {
            let mut next = (**current).clone();
            changed = next.remove(&id);
            next
        });
        if changed {
            info!(record_id = id, "Record marked healthy");
        }
        changed
    }

    /// Replaces the whole unhealthy set.
    pub fn replace(&self, ids: impl IntoIterator<Item = RecordId>) {
        let next: FxHashSet<RecordId> = ids.into_iter().collect();
        info!(unhealthy = next.len(), "Health status replaced");
        self.unhealthy.store(Arc::new(next));
    }

    /// Unhealthy ids in ascending order.
    pub fn unhealthy_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<_> = self.unhealthy.load().iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for HealthStatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthMonitor for HealthStatusRegistry {
    fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot::new(self.unhealthy.load_full())
    }
}
