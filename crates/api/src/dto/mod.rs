pub mod remote_backend;
pub mod status;

pub use remote_backend::{LookupResult, RemoteBackendResponse};
pub use status::{StatusResponse, StatusUpdateRequest};
