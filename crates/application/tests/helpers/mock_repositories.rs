#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_gslb_application::ports::{HealthMonitor, RecordStore};
use ferrous_gslb_domain::{
    DomainError, GslbRecord, HealthSnapshot, LookupQuery, RecordId, RecordType,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordStore
// ============================================================================

/// Returns its configured records for any query and remembers the queries.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<Vec<GslbRecord>>>,
    queries: Arc<RwLock<Vec<LookupQuery>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<GslbRecord>) -> Self {
        let store = Self::new();
        *store.records.write().await = records;
        store
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn queries(&self) -> Vec<LookupQuery> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn query(&self, query: &LookupQuery) -> Result<Vec<GslbRecord>, DomainError> {
        self.queries.write().await.push(query.clone());

        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("Mock store failed".to_string()));
        }

        Ok(self.records.read().await.clone())
    }
}

// ============================================================================
// Mock HealthMonitor
// ============================================================================

/// Fixed unhealthy set; counts how often a snapshot is taken.
#[derive(Default)]
pub struct MockHealthMonitor {
    unhealthy: Vec<RecordId>,
    snapshots: AtomicUsize,
}

impl MockHealthMonitor {
    pub fn new(unhealthy: Vec<RecordId>) -> Self {
        Self {
            unhealthy,
            snapshots: AtomicUsize::new(0),
        }
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.load(Ordering::SeqCst)
    }
}

impl HealthMonitor for MockHealthMonitor {
    fn snapshot(&self) -> HealthSnapshot {
        self.snapshots.fetch_add(1, Ordering::SeqCst);
        self.unhealthy.iter().copied().collect()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct RecordBuilder {
    record: GslbRecord,
}

impl RecordBuilder {
    pub fn new(id: RecordId, qtype: RecordType, content: &str) -> Self {
        Self {
            record: GslbRecord {
                id,
                qname: Arc::from("www.example.com"),
                qtype,
                content: content.to_string(),
                ttl: 60,
                weight: 0,
                fallback: false,
                persistence: 0,
            },
        }
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.record.weight = weight;
        self
    }

    pub fn fallback(mut self) -> Self {
        self.record.fallback = true;
        self
    }

    pub fn persistence(mut self, bits: u32) -> Self {
        self.record.persistence = bits;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.record.ttl = ttl;
        self
    }

    pub fn build(self) -> GslbRecord {
        self.record
    }
}

pub fn a_record(id: RecordId, weight: u32) -> RecordBuilder {
    RecordBuilder::new(id, RecordType::A, &format!("192.0.2.{id}")).weight(weight)
}
