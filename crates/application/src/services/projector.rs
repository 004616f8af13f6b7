use ferrous_gslb_domain::{Candidate, PublicRecord};

/// Reduces selected records to their wire shape, preserving order.
pub fn project(records: Vec<Candidate>) -> Vec<PublicRecord> {
    records.into_iter().map(PublicRecord::from).collect()
}
