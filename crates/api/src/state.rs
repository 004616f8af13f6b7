use axum::http::HeaderName;
use ferrous_gslb_application::use_cases::LookupUseCase;
use ferrous_gslb_infrastructure::health::HealthStatusRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupUseCase>,
    pub health: Arc<HealthStatusRegistry>,
    /// Header carrying the resolver-side client address.
    pub client_address_header: HeaderName,
}
