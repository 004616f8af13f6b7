use std::sync::Arc;

/// Query type wildcard sent by the name server when it wants every type.
pub const ANY_QTYPE: &str = "ANY";

/// A lookup as named by the remote-backend request path.
///
/// `qtype` stays a raw string: `ANY` and types this zone never stores are
/// both valid requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub qname: Arc<str>,
    pub qtype: Arc<str>,
}

impl LookupQuery {
    pub fn new(qname: impl Into<Arc<str>>, qtype: impl Into<Arc<str>>) -> Self {
        Self {
            qname: qname.into(),
            qtype: qtype.into(),
        }
    }

    pub fn is_any(&self) -> bool {
        self.qtype.eq_ignore_ascii_case(ANY_QTYPE)
    }

    /// Lowercased qname without the trailing root dot.
    pub fn normalized_qname(&self) -> String {
        normalize_qname(&self.qname)
    }
}

pub fn normalize_qname(qname: &str) -> String {
    qname.trim_end_matches('.').to_ascii_lowercase()
}
