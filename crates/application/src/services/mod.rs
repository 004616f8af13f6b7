pub mod classifier;
pub mod persistence_selector;
pub mod pipeline;
pub mod projector;
pub mod tier_selector;

pub use classifier::classify;
pub use persistence_selector::{affinity_value, pick, stable_hash};
pub use pipeline::lookup;
pub use projector::project;
pub use tier_selector::{select_tier, Eligibility, Tier};
