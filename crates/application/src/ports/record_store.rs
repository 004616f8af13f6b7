use async_trait::async_trait;
use ferrous_gslb_domain::{DomainError, GslbRecord, LookupQuery};

/// Source of candidate records for a queried name.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every enabled record matching the query, in source order.
    ///
    /// # Errors
    ///
    /// * `DomainError::DatabaseError` - If the backing store cannot be read
    async fn query(&self, query: &LookupQuery) -> Result<Vec<GslbRecord>, DomainError>;
}
