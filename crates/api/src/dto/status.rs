use ferrous_gslb_domain::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct StatusResponse {
    pub unhealthy: Vec<RecordId>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatusUpdateRequest {
    pub unhealthy: Vec<RecordId>,
}
