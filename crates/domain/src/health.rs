use crate::RecordId;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Immutable view of the records currently considered unhealthy.
///
/// Taken once per request; cloning shares the underlying set.
#[derive(Debug, Clone, Default)]
pub struct HealthSnapshot {
    unhealthy: Arc<FxHashSet<RecordId>>,
}

impl HealthSnapshot {
    pub fn new(unhealthy: Arc<FxHashSet<RecordId>>) -> Self {
        Self { unhealthy }
    }

    pub fn is_unhealthy(&self, id: RecordId) -> bool {
        self.unhealthy.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.unhealthy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unhealthy.is_empty()
    }
}

impl FromIterator<RecordId> for HealthSnapshot {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self::new(Arc::new(iter.into_iter().collect()))
    }
}
