use ferrous_gslb_domain::{DomainError, LookupQuery, PublicRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{HealthMonitor, RecordStore};
use crate::services;

/// Use case answering a remote-backend lookup.
///
/// Takes one health snapshot and one candidate fetch per request, then
/// hands both to the selection pipeline.
pub struct LookupUseCase {
    record_store: Arc<dyn RecordStore>,
    health_monitor: Arc<dyn HealthMonitor>,
}

impl LookupUseCase {
    pub fn new(record_store: Arc<dyn RecordStore>, health_monitor: Arc<dyn HealthMonitor>) -> Self {
        Self {
            record_store,
            health_monitor,
        }
    }

    /// Selects the answer records for `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PublicRecord>)` - The answer, possibly empty
    /// * `Err(DomainError)` - If the record store fails
    #[instrument(skip(self, query), fields(qname = %query.qname, qtype = %query.qtype))]
    pub async fn execute(
        &self,
        query: &LookupQuery,
        client_address: Option<&str>,
    ) -> Result<Vec<PublicRecord>, DomainError> {
        let health = self.health_monitor.snapshot();
        let candidates = self.record_store.query(query).await?;
        let fetched = candidates.len();

        let answer = services::lookup(candidates, &health, client_address);

        debug!(
            candidates = fetched,
            unhealthy = health.len(),
            answers = answer.len(),
            "Lookup answered"
        );

        Ok(answer)
    }
}
