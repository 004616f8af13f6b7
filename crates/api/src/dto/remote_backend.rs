use ferrous_gslb_domain::PublicRecord;
use serde::Serialize;

/// `{"result": ...}` envelope of the remote-backend protocol.
#[derive(Serialize, Debug, Clone)]
pub struct RemoteBackendResponse {
    pub result: LookupResult,
}

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum LookupResult {
    Records(Vec<PublicRecord>),
    /// Always `false`: the request was not a lookup, or could not be served.
    Rejected(bool),
}

impl RemoteBackendResponse {
    pub fn records(records: Vec<PublicRecord>) -> Self {
        Self {
            result: LookupResult::Records(records),
        }
    }

    pub fn rejected() -> Self {
        Self {
            result: LookupResult::Rejected(false),
        }
    }
}
