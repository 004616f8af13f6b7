use crate::{Candidate, RecordData, RecordType};
use serde::Serialize;
use std::sync::Arc;

/// Wire shape of an answer record.
///
/// Serialized untagged; field order is part of the remote-backend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PublicRecord {
    Prioritized {
        qname: Arc<str>,
        qtype: RecordType,
        content: String,
        ttl: u32,
        priority: i64,
    },
    Plain {
        qname: Arc<str>,
        qtype: RecordType,
        content: String,
        ttl: u32,
    },
}

impl PublicRecord {
    pub fn qtype(&self) -> RecordType {
        match self {
            PublicRecord::Prioritized { qtype, .. } | PublicRecord::Plain { qtype, .. } => *qtype,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            PublicRecord::Prioritized { content, .. } | PublicRecord::Plain { content, .. } => {
                content
            }
        }
    }
}

impl From<Candidate> for PublicRecord {
    fn from(candidate: Candidate) -> Self {
        let Candidate {
            qname,
            qtype,
            ttl,
            data,
            ..
        } = candidate;

        match data {
            RecordData::Prioritized { priority, content } => PublicRecord::Prioritized {
                qname,
                qtype,
                content,
                ttl,
                priority,
            },
            RecordData::Plain { content } => PublicRecord::Plain {
                qname,
                qtype,
                content,
                ttl,
            },
        }
    }
}
