pub mod status_registry;

pub use status_registry::HealthStatusRegistry;
