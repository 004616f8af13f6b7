use axum::http::HeaderName;
use ferrous_gslb_api::AppState;
use ferrous_gslb_application::use_cases::LookupUseCase;
use ferrous_gslb_domain::Config;
use ferrous_gslb_infrastructure::health::HealthStatusRegistry;
use ferrous_gslb_infrastructure::repositories::SqliteRecordStore;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

/// Wires the record store and health registry into the request state.
pub fn build_app_state(config: &Config, pool: SqlitePool) -> anyhow::Result<AppState> {
    let client_address_header = HeaderName::try_from(config.gslb.client_address_header.as_str())?;

    let health = Arc::new(HealthStatusRegistry::with_unhealthy(
        config.gslb.unhealthy_records.iter().copied(),
    ));
    let record_store = Arc::new(SqliteRecordStore::new(pool));
    let lookup = Arc::new(LookupUseCase::new(record_store, health.clone()));

    info!(
        client_address_header = %client_address_header,
        initially_unhealthy = config.gslb.unhealthy_records.len(),
        "Lookup pipeline ready"
    );

    Ok(AppState {
        lookup,
        health,
        client_address_header,
    })
}
