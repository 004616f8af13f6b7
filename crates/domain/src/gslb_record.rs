use crate::RecordType;
use std::sync::Arc;

pub type RecordId = i64;

/// A candidate record as handed over by the record store.
///
/// `content` is raw: for MX and SRV it still carries the leading priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GslbRecord {
    pub id: RecordId,
    pub qname: Arc<str>,
    pub qtype: RecordType,
    pub content: String,
    pub ttl: u32,
    /// Higher weight means a more preferred tier.
    pub weight: u32,
    /// Served only when no live record of the same type exists.
    pub fallback: bool,
    /// Number of low-order client address bits ignored for affinity; 0 disables it.
    pub persistence: u32,
}

/// Record payload after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Plain { content: String },
    Prioritized { priority: i64, content: String },
}

impl RecordData {
    pub fn content(&self) -> &str {
        match self {
            RecordData::Plain { content } | RecordData::Prioritized { content, .. } => content,
        }
    }

    pub fn priority(&self) -> Option<i64> {
        match self {
            RecordData::Plain { .. } => None,
            RecordData::Prioritized { priority, .. } => Some(*priority),
        }
    }
}

/// A classified record taking part in tier selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: RecordId,
    pub qname: Arc<str>,
    pub qtype: RecordType,
    pub ttl: u32,
    pub weight: u32,
    pub fallback: bool,
    pub persistence: u32,
    pub data: RecordData,
}

impl Candidate {
    pub fn new(record: GslbRecord, data: RecordData) -> Self {
        Self {
            id: record.id,
            qname: record.qname,
            qtype: record.qtype,
            ttl: record.ttl,
            weight: record.weight,
            fallback: record.fallback,
            persistence: record.persistence,
            data,
        }
    }
}
