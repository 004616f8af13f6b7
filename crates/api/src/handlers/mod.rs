pub mod health;
pub mod remote_backend;
pub mod status;

pub use health::health_check;
pub use remote_backend::{parse_lookup_path, remote_backend};
pub use status::{get_status, mark_healthy, mark_unhealthy, replace_status};
