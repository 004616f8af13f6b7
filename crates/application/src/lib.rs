//! Ferrous GSLB Application Layer
//!
//! Record selection for remote-backend lookups: classification by query
//! type, health-aware tier selection, client-affinity narrowing and
//! projection to the wire shape.
pub mod ports;
pub mod services;
pub mod use_cases;
