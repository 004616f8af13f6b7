use crate::RecordId;
use serde::{Deserialize, Serialize};

/// Record selection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GslbConfig {
    /// Request header carrying the resolver-side client address
    /// (default: "X-Remotebackend-Real-Remote")
    #[serde(default = "default_client_address_header")]
    pub client_address_header: String,

    /// Record ids treated as unhealthy until the monitor reports otherwise
    #[serde(default)]
    pub unhealthy_records: Vec<RecordId>,
}

impl Default for GslbConfig {
    fn default() -> Self {
        Self {
            client_address_header: default_client_address_header(),
            unhealthy_records: Vec::new(),
        }
    }
}

fn default_client_address_header() -> String {
    "X-Remotebackend-Real-Remote".to_string()
}
