use async_trait::async_trait;
use ferrous_gslb_application::ports::RecordStore;
use ferrous_gslb_domain::{DomainError, GslbRecord, LookupQuery, RecordType};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type RecordRow = (i64, String, String, String, i64, i64, bool, i64);

pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rows with an unknown type or an out-of-range number are skipped.
    fn row_to_record(row: RecordRow) -> Option<GslbRecord> {
        let (id, qname, qtype, content, ttl, weight, fallback, persistence) = row;

        let qtype = match qtype.parse::<RecordType>() {
            Ok(qtype) => qtype,
            Err(e) => {
                warn!(record_id = id, error = %e, "Skipping record");
                return None;
            }
        };

        let (Ok(ttl), Ok(weight), Ok(persistence)) = (
            u32::try_from(ttl),
            u32::try_from(weight),
            u32::try_from(persistence),
        ) else {
            warn!(record_id = id, "Skipping record with out-of-range ttl, weight or persistence");
            return None;
        };

        Some(GslbRecord {
            id,
            qname: Arc::from(qname.as_str()),
            qtype,
            content,
            ttl,
            weight,
            fallback,
            persistence,
        })
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn query(&self, query: &LookupQuery) -> Result<Vec<GslbRecord>, DomainError> {
        let qname = query.normalized_qname();
        let qtype = if query.is_any() {
            None
        } else {
            Some(query.qtype.to_ascii_uppercase())
        };

        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, qname, qtype, content, ttl, weight, fallback, persistence
             FROM gslb_records
             WHERE lower(rtrim(qname, '.')) = ?
               AND (? IS NULL OR upper(qtype) = ?)
               AND disabled = 0
             ORDER BY id",
        )
        .bind(&qname)
        .bind(&qtype)
        .bind(&qtype)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query gslb records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_record).collect())
    }
}
