//! Ferrous GSLB Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod gslb_record;
pub mod health;
pub mod lookup_query;
pub mod public_record;
pub mod qtype_groups;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use gslb_record::{Candidate, GslbRecord, RecordData, RecordId};
pub use health::HealthSnapshot;
pub use lookup_query::LookupQuery;
pub use public_record::PublicRecord;
pub use qtype_groups::QtypeGroups;
