mod health_monitor;
mod record_store;

pub use health_monitor::HealthMonitor;
pub use record_store::RecordStore;
